//! Display model implementations for table and JSON output
//!
//! Display models transform API and session types into CLI-friendly formats
//! with appropriate column names and serialization.

mod event;
mod session;

pub use session::SessionDisplay;

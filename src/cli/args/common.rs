//! Common CLI types shared across commands

use serde::{Deserialize, Serialize};

/// Output format options
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

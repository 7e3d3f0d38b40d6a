//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Types that can render themselves in every [`OutputFormat`]
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

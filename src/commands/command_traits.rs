//! Command pattern interface
//!
//! Each CLI operation is a command object built from parsed arguments
//! and run once.

use crate::errors::ExtractResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> ExtractResult<()>;
}

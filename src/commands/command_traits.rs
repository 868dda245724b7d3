//! Command pattern interfaces
//!
//! Each CLI mode is a self-contained command object built from the parsed
//! arguments; the factory trait picks which one a given invocation gets.

use crate::crs::errors::CrsResult;
use crate::utils::logger::Logger;

/// An executable CLI operation
pub trait Command {
    /// Run the operation
    ///
    /// # Returns
    /// Ok on success, or the error that stopped the run
    fn execute(&self) -> CrsResult<()>;
}

/// Builds the command matching a set of CLI arguments
pub trait CommandFactory<'a> {
    /// Select and construct the command for the given arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// The command to execute, or an error if its arguments are incomplete
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        logger: &'a Logger,
    ) -> CrsResult<Box<dyn Command + 'a>>;
}

//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod describe_command;
pub mod zone_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use describe_command::DescribeCommand;
pub use zone_command::ZoneCommand;

use clap::ArgMatches;

use crate::crs::errors::CrsResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CrsResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_one::<String>("describe").is_some() {
            Ok(Box::new(DescribeCommand::new(args, logger)?))
        } else if args.get_one::<String>("zone").is_some() {
            Ok(Box::new(ZoneCommand::new(args, logger)?))
        } else {
            // Default to point conversion
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        }
    }
}

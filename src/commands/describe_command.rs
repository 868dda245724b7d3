//! CRS description command
//!
//! This module implements the command for parsing a CRS description and
//! displaying its canonical form and projection descriptor.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::Crs;
use crate::utils::logger::Logger;

/// Command for describing a CRS string
pub struct DescribeCommand<'a> {
    /// The CRS description to describe
    definition: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DescribeCommand<'a> {
    /// Create a new describe command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        let definition = args
            .get_one::<String>("describe")
            .ok_or_else(|| CrsError::Parse("missing CRS description to describe".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(DescribeCommand {
            definition,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for DescribeCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let crs = Crs::from_str_or_raw(&self.definition)?;

        info!("CRS Description:");
        info!("  Canonical form: {}", crs);

        let offset = crs.offset();
        info!("  Offset: {} {} {}", offset[0], offset[1], offset[2]);

        match crs.proj_def() {
            Some(def) => info!("  Projection definition: {}", def),
            None => info!("  Projection definition: none (local tangent plane)"),
        }

        if self.verbose {
            info!("  Parsed variant: {:?}", crs);
        }

        self.logger.log(&format!("Described CRS: {}", crs))?;

        Ok(())
    }
}

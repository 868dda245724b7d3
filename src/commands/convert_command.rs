//! Point batch conversion command
//!
//! This module implements the command for converting a file of points
//! between two coordinate reference systems.

use std::fs;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::converter::{CoordinateConverter, PointBatch};
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::Crs;
use crate::utils::logger::Logger;

/// Command for converting a point file between two systems
pub struct ConvertCommand<'a> {
    /// Source CRS description
    from: String,
    /// Target CRS description
    to: String,
    /// Path to the input point file
    input: String,
    /// Optional path for the converted output
    output: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        let from = args
            .get_one::<String>("from")
            .ok_or_else(|| CrsError::Parse("missing --from CRS description".to_string()))?
            .clone();
        let to = args
            .get_one::<String>("to")
            .ok_or_else(|| CrsError::Parse("missing --to CRS description".to_string()))?
            .clone();
        let input = args
            .get_one::<String>("input")
            .ok_or_else(|| CrsError::Parse("missing --input point file".to_string()))?
            .clone();
        let output = args.get_one::<String>("output").cloned();

        Ok(ConvertCommand {
            from,
            to,
            input,
            output,
            logger,
        })
    }

    /// Read the input file into a point batch
    ///
    /// One point per line, values separated by whitespace; empty lines are
    /// skipped. Shape problems surface when the batch is converted.
    fn read_points(&self) -> CrsResult<PointBatch> {
        let text = fs::read_to_string(&self.input)?;

        let mut rows = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::new();
            for value in line.split_whitespace() {
                let parsed = value.parse::<f64>().map_err(|_| {
                    CrsError::Parse(format!(
                        "line {}: invalid point value '{}'",
                        number + 1,
                        value
                    ))
                })?;
                row.push(parsed);
            }
            rows.push(row);
        }

        debug!("Read {} points from {}", rows.len(), self.input);
        PointBatch::from_rows(rows)
    }

    /// Format a converted batch, one point per line
    fn format_points(batch: &PointBatch) -> String {
        let mut text = String::new();
        for row in batch.iter_rows() {
            let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            text.push_str(&values.join(" "));
            text.push('\n');
        }
        text
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        info!("Converting points: {} -> {}", self.from, self.to);

        let from_crs = Crs::from_str_or_raw(&self.from)?;
        let to_crs = Crs::from_str_or_raw(&self.to)?;
        let converter = CoordinateConverter::new(&from_crs, &to_crs)?;

        let points = self.read_points()?;
        let converted = converter.convert(&points)?;

        let text = Self::format_points(&converted);
        match &self.output {
            Some(path) => {
                fs::write(path, text)?;
                info!("Wrote {} converted points to {}", converted.rows(), path);
            }
            None => print!("{}", text),
        }

        self.logger
            .print_conversion_summary(&self.from, &self.to, converted.rows())?;

        Ok(())
    }
}

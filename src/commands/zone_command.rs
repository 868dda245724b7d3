//! UTM zone lookup command
//!
//! This module implements the command for deriving the UTM system that
//! contains a geodetic point.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::Utm;
use crate::utils::logger::Logger;

/// Command for printing the UTM system containing a geodetic point
pub struct ZoneCommand<'a> {
    /// Coordinate string in "lon,lat" format
    coordinate: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ZoneCommand<'a> {
    /// Create a new zone command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        let coordinate = args
            .get_one::<String>("zone")
            .ok_or_else(|| CrsError::Parse("missing coordinate for zone lookup".to_string()))?
            .clone();

        Ok(ZoneCommand { coordinate, logger })
    }

    /// Parse the "lon,lat" coordinate argument
    fn parse_coordinate(&self) -> CrsResult<(f64, f64)> {
        let parts: Vec<&str> = self.coordinate.split(',').collect();
        if parts.len() != 2 {
            return Err(CrsError::Parse(
                "coordinate must be in 'lon,lat' format".to_string(),
            ));
        }

        let lon = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| CrsError::Parse("invalid longitude coordinate".to_string()))?;
        let lat = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| CrsError::Parse("invalid latitude coordinate".to_string()))?;

        Ok((lon, lat))
    }
}

impl<'a> Command for ZoneCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let (lon, lat) = self.parse_coordinate()?;

        let utm = Utm::from_point(lon, lat);
        info!("UTM system for ({}, {}): {}", lon, lat, utm);
        info!("  Projection definition: {}", utm.proj_str());

        self.logger
            .log(&format!("Zone lookup ({}, {}) -> {}", lon, lat, utm))?;

        Ok(())
    }
}

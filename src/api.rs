use std::str::FromStr;

use log::info;

use crate::converter::{CoordinateConverter, PointBatch};
use crate::crs::errors::CrsResult;
use crate::crs::Crs;
use crate::utils::logger::Logger;

/// Main interface to the CoordKit library
pub struct CoordKit {
    logger: Logger,
}

impl CoordKit {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "coordkit.log"
    ///
    /// # Returns
    /// A CoordKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CrsResult<Self> {
        let log_path = log_file.unwrap_or("coordkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CoordKit { logger })
    }

    /// Parse a CRS description using the keyword grammars
    ///
    /// # Arguments
    /// * `definition` - A CRS description such as "ENU -77.5 38.9 100" or "UTM 31N"
    ///
    /// # Returns
    /// The parsed CRS, or an error for empty, unrecognized, or malformed input
    pub fn parse(&self, definition: &str) -> CrsResult<Crs> {
        Crs::from_str(definition)
    }

    /// Parse a CRS description, treating strings that match no keyword
    /// family as raw projection definitions
    pub fn parse_or_raw(&self, definition: &str) -> CrsResult<Crs> {
        Crs::from_str_or_raw(definition)
    }

    /// Describe a CRS string
    ///
    /// # Arguments
    /// * `definition` - The CRS description to describe
    ///
    /// # Returns
    /// String containing the canonical form, offset, and projection
    /// descriptor of the system, or an error
    pub fn describe(&self, definition: &str) -> CrsResult<String> {
        let crs = Crs::from_str_or_raw(definition)?;

        let mut result = String::from("CRS Description:\n");
        result.push_str(&format!("  Canonical form: {}\n", crs));

        let offset = crs.offset();
        result.push_str(&format!(
            "  Offset: {} {} {}\n",
            offset[0], offset[1], offset[2]
        ));

        match crs.proj_def() {
            Some(def) => result.push_str(&format!("  Projection definition: {}\n", def)),
            None => result.push_str("  Projection definition: none (local tangent plane)\n"),
        }

        self.logger.log(&format!("Described CRS: {}", crs))?;

        Ok(result)
    }

    /// Build a converter between two CRS descriptions
    ///
    /// # Arguments
    /// * `from` - Description of the system to convert points from
    /// * `to` - Description of the system to convert points to
    pub fn converter(&self, from: &str, to: &str) -> CrsResult<CoordinateConverter> {
        let from_crs = Crs::from_str_or_raw(from)?;
        let to_crs = Crs::from_str_or_raw(to)?;

        info!("Building converter: {} -> {}", from_crs, to_crs);
        CoordinateConverter::new(&from_crs, &to_crs)
    }

    /// Convert a point batch between two CRS descriptions in one call
    ///
    /// # Arguments
    /// * `from` - Description of the source system
    /// * `to` - Description of the target system
    /// * `points` - A batch of shape (N, 3) in the source system's axis order
    ///
    /// # Returns
    /// The converted batch, or an error from parsing, chain selection, or
    /// shape validation
    pub fn convert(&self, from: &str, to: &str, points: &PointBatch) -> CrsResult<PointBatch> {
        let converter = self.converter(from, to)?;
        let converted = converter.convert(points)?;

        self.logger
            .print_conversion_summary(from, to, converted.rows())?;

        Ok(converted)
    }
}

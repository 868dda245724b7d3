//! Custom error types for CRS parsing and point conversion

use std::fmt;
use std::io;

/// CRS-specific error types
#[derive(Debug)]
pub enum CrsError {
    /// Empty string passed where a CRS description was required
    EmptyInput,
    /// A string matched no CRS grammar
    CrsDef(String),
    /// Point batch did not have the expected (N, 3) shape
    Shape { rows: usize, cols: usize },
    /// Attempt to use a reference ellipsoid other than the default
    UnsupportedEllipsoid(String),
    /// Malformed numeric or textual input
    Parse(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for CrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsError::EmptyInput => {
                write!(f, "Cannot build a coordinate reference system from an empty string")
            }
            CrsError::CrsDef(msg) => write!(f, "Invalid CRS definition: {}", msg),
            CrsError::Shape { rows, cols } => {
                write!(f, "Cannot convert non-3D points: shape was ({}, {})", rows, cols)
            }
            CrsError::UnsupportedEllipsoid(msg) => {
                write!(f, "Unsupported reference ellipsoid: {}", msg)
            }
            CrsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CrsError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CrsError {}

impl From<io::Error> for CrsError {
    fn from(error: io::Error) -> Self {
        CrsError::IoError(error)
    }
}

/// Result type for CRS operations
pub type CrsResult<T> = Result<T, CrsError>;

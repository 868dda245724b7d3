//! Point batch container and shape reporting

use crate::crs::errors::{CrsError, CrsResult};

/// A row-major batch of points
///
/// The batch always has a rectangular (rows, cols) shape; conversion
/// requires exactly three columns and reports any other shape as an error
/// rather than guessing at the caller's intent.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl PointBatch {
    /// Create a batch of 3D points
    pub fn from_points(points: Vec<[f64; 3]>) -> Self {
        let rows = points.len();
        let mut data = Vec::with_capacity(rows * 3);
        for point in &points {
            data.extend_from_slice(point);
        }

        PointBatch {
            data,
            rows,
            cols: 3,
        }
    }

    /// Create a batch from nested rows
    ///
    /// All rows must have the same non-zero length. An empty outer vector
    /// produces an empty three-column batch.
    ///
    /// # Arguments
    /// * `rows` - One inner vector per point
    ///
    /// # Returns
    /// The batch, or an error describing the first inconsistent row
    pub fn from_rows(rows: Vec<Vec<f64>>) -> CrsResult<Self> {
        let count = rows.len();
        let cols = match rows.first() {
            Some(first) if first.is_empty() => {
                return Err(CrsError::Parse("rows must contain at least one value".to_string()));
            }
            Some(first) => first.len(),
            None => 3,
        };

        let mut data = Vec::with_capacity(count * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(CrsError::Parse(format!(
                    "row {} has {} values, expected {}",
                    index,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(PointBatch {
            data,
            rows: count,
            cols,
        })
    }

    /// Get the (rows, cols) shape of the batch
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of points in the batch
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of values per point
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get one row as a slice
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// Iterate over the rows of the batch
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols)
    }

    /// Get one row of a three-column batch as a point
    ///
    /// Callers validate the column count before using this.
    pub(crate) fn point(&self, index: usize) -> [f64; 3] {
        let row = self.row(index);
        [row[0], row[1], row[2]]
    }
}

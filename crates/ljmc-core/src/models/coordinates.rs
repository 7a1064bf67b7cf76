use nalgebra::DMatrix;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A dense table of particle positions: one row per particle, one column per
/// spatial dimension.
///
/// The table is built once at the conversion boundary and never mutated; the
/// energy kernels only ever borrow it. Rectangularity is the single structural
/// invariant, checked in [`CoordinateSet::from_rows`] so the kernels can index
/// rows without re-validating shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSet {
    matrix: DMatrix<f64>,
}

impl CoordinateSet {
    /// Builds a coordinate table from row slices, e.g. as extracted from a
    /// Python sequence-of-sequences.
    ///
    /// All rows must have the width of the first row. An empty input yields a
    /// valid zero-particle table.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, CoordinateError> {
        let num_particles = rows.len();
        let dimensions = rows.first().map_or(0, Vec::len);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != dimensions {
                return Err(CoordinateError::RaggedRow {
                    row,
                    expected: dimensions,
                    found: values.len(),
                });
            }
        }

        let matrix = DMatrix::from_row_iterator(
            num_particles,
            dimensions,
            rows.iter().flatten().copied(),
        );
        Ok(Self { matrix })
    }

    pub fn from_matrix(matrix: DMatrix<f64>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn num_particles(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn dimensions(&self) -> usize {
        self.matrix.ncols()
    }
}

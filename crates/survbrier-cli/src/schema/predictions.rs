use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Model predictions evaluated at a set of time horizons
///
/// `values[i][j]` is the prediction for test sample `i` at `times[j]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionsFile {
    /// Time horizons, expected in ascending order
    pub times: Vec<f64>,
    /// One row per test sample, one column per time horizon
    pub values: Vec<Vec<f64>>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PredictionsError {
    #[display("prediction row {row} has {len} values, expected {expected} like the first row")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("prediction at row {row}, column {column} must be a probability in [0, 1], got {value}")]
    InvalidProbability { row: usize, column: usize, value: f64 },
}

impl PredictionsFile {
    /// Converts the rows into a `samples x times` matrix.
    ///
    /// With no rows, the matrix has zero rows and one column per time horizon.
    pub fn to_matrix(&self) -> Result<Array2<f64>, PredictionsError> {
        let n_columns = self.values.first().map_or(self.times.len(), Vec::len);
        for (row, values) in self.values.iter().enumerate() {
            if values.len() != n_columns {
                return Err(PredictionsError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: n_columns,
                });
            }
            if let Some((column, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| !(0.0..=1.0).contains(*v))
            {
                return Err(PredictionsError::InvalidProbability { row, column, value });
            }
        }
        Ok(Array2::from_shape_fn(
            (self.values.len(), n_columns),
            |(row, column)| self.values[row][column],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions(times: Vec<f64>, values: Vec<Vec<f64>>) -> PredictionsFile {
        PredictionsFile { times, values }
    }

    #[test]
    fn test_to_matrix_is_row_major() {
        let file = predictions(vec![1.0, 2.0], vec![vec![0.9, 0.5], vec![0.8, 0.3]]);
        let matrix = file.to_matrix().unwrap();
        assert_eq!(matrix.dim(), (2, 2));
        assert_eq!(matrix[[0, 1]], 0.5);
        assert_eq!(matrix[[1, 0]], 0.8);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let file = predictions(vec![1.0, 2.0], vec![vec![0.9, 0.5], vec![0.8]]);
        assert!(matches!(
            file.to_matrix(),
            Err(PredictionsError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        let file = predictions(vec![1.0], vec![vec![0.5], vec![1.5]]);
        assert!(matches!(
            file.to_matrix(),
            Err(PredictionsError::InvalidProbability {
                row: 1,
                column: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_column_count_is_kept_when_it_differs_from_times() {
        // The metric reports the mismatch with both lengths
        let file = predictions(vec![1.0, 2.0], vec![vec![0.5, 0.5, 0.5]]);
        assert_eq!(file.to_matrix().unwrap().ncols(), 3);
    }

    #[test]
    fn test_empty_rows() {
        let file = predictions(vec![1.0, 2.0], vec![]);
        assert_eq!(file.to_matrix().unwrap().dim(), (0, 2));
    }
}

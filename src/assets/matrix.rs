use std::path::Path;

use ndarray::{Array2, ArrayView1};
use ndarray_npy::{read_npy, ReadNpyError};

use crate::error::StartupError;

/// Square table of precomputed pairwise similarity scores
///
/// `score(i, j)` is the similarity between movies at rows `i` and `j` of the
/// metadata table. Symmetry is expected but not enforced.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Array2<f64>,
}

impl SimilarityMatrix {
    /// Wraps a score array, rejecting non-square shapes and NaN/infinite scores
    pub fn new(scores: Array2<f64>) -> Result<Self, StartupError> {
        let (rows, cols) = scores.dim();
        if rows != cols {
            return Err(StartupError::NotSquare { rows, cols });
        }

        if let Some(((row, col), _)) = scores.indexed_iter().find(|(_, score)| !score.is_finite()) {
            return Err(StartupError::NonFiniteScore { row, col });
        }

        Ok(Self { scores })
    }

    /// Reads a 2-D NumPy array from an `.npy` file
    ///
    /// `float64` is the native layout; `float32` files are widened.
    pub fn from_npy(path: &Path) -> Result<Self, StartupError> {
        let to_startup_error = |source| StartupError::Matrix {
            path: path.to_path_buf(),
            source,
        };

        let scores = match read_npy::<_, Array2<f64>>(path) {
            Ok(scores) => scores,
            Err(ReadNpyError::WrongDescriptor(_)) => {
                tracing::debug!(path = %path.display(), "Matrix is not float64, retrying as float32");
                let narrow: Array2<f32> = read_npy(path).map_err(to_startup_error)?;
                narrow.mapv(f64::from)
            }
            Err(source) => return Err(to_startup_error(source)),
        };

        Self::new(scores)
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.scores.nrows()
    }

    /// Scores of every movie against the movie at `idx`
    pub fn row(&self, idx: usize) -> Option<ArrayView1<'_, f64>> {
        (idx < self.dim()).then(|| self.scores.row(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_npy::write_npy;

    #[test]
    fn test_accepts_square_matrix() {
        let matrix = SimilarityMatrix::new(array![[1.0, 0.3], [0.3, 1.0]]).unwrap();
        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.row(1).unwrap().to_vec(), vec![0.3, 1.0]);
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let err = SimilarityMatrix::new(Array2::zeros((2, 3))).unwrap_err();
        assert!(matches!(err, StartupError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_rejects_nan_scores() {
        let err = SimilarityMatrix::new(array![[1.0, 0.2], [f64::NAN, 1.0]]).unwrap_err();
        assert!(matches!(err, StartupError::NonFiniteScore { row: 1, col: 0 }));
    }

    #[test]
    fn test_reads_float64_npy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cosine_sim.npy");
        write_npy(&path, &array![[1.0_f64, 0.25], [0.25, 1.0]]).unwrap();

        let matrix = SimilarityMatrix::from_npy(&path).unwrap();
        assert_eq!(matrix.row(0).unwrap().to_vec(), vec![1.0, 0.25]);
    }

    #[test]
    fn test_widens_float32_npy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cosine_sim.npy");
        write_npy(&path, &array![[1.0_f32, 0.5], [0.5, 1.0]]).unwrap();

        let matrix = SimilarityMatrix::from_npy(&path).unwrap();
        assert_eq!(matrix.row(1).unwrap().to_vec(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_missing_file_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.npy");

        let err = SimilarityMatrix::from_npy(&path).unwrap_err();
        assert!(matches!(err, StartupError::Matrix { .. }));
        assert!(err.to_string().contains("absent.npy"));
    }

    #[test]
    fn test_one_dimensional_npy_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.npy");
        write_npy(&path, &array![1.0_f64, 0.5, 0.25]).unwrap();

        let err = SimilarityMatrix::from_npy(&path).unwrap_err();
        assert!(matches!(err, StartupError::Matrix { .. }));
    }
}

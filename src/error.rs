use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::{MovieNotFound, NotFoundResponse};

/// Request-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MovieNotFound(MovieNotFound),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MovieNotFound(not_found) => {
                (StatusCode::NOT_FOUND, Json(NotFoundResponse::from(not_found))).into_response()
            }
            AppError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures while loading the model assets
///
/// Every variant is fatal: the service must not start serving without a
/// complete, consistent asset store.
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("failed to read similarity matrix {}: {source}", .path.display())]
    Matrix {
        path: PathBuf,
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    #[error("failed to read metadata table {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("similarity matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("similarity matrix has a non-finite score at ({row}, {col})")]
    NonFiniteScore { row: usize, col: usize },

    #[error("similarity matrix has {matrix_rows} rows but metadata table has {movies}")]
    DimensionMismatch { matrix_rows: usize, movies: usize },
}

//! Model assets loaded once at startup
//!
//! The similarity matrix, the metadata table and the title index are built
//! together and never change afterwards; request handlers share them through
//! an `Arc<AssetStore>`.

use std::path::Path;

use crate::{
    error::StartupError,
    models::{normalize, MovieRecord, NormalizedTitle},
};

pub mod index;
pub mod matrix;
pub mod metadata;

pub use index::TitleIndex;
pub use matrix::SimilarityMatrix;

/// Immutable, fully validated model assets
#[derive(Debug, Clone)]
pub struct AssetStore {
    matrix: SimilarityMatrix,
    movies: Vec<MovieRecord>,
    /// Normalized form of each movie's display title, by row
    normalized: Vec<NormalizedTitle>,
    index: TitleIndex,
}

impl AssetStore {
    /// Loads the similarity matrix and metadata table from disk
    pub fn load(matrix_path: &Path, metadata_path: &Path) -> Result<Self, StartupError> {
        tracing::info!(
            matrix = %matrix_path.display(),
            metadata = %metadata_path.display(),
            "Loading model assets"
        );

        let matrix = SimilarityMatrix::from_npy(matrix_path)?;
        let movies = metadata::load_movies(metadata_path)?;

        Self::from_parts(matrix, movies)
    }

    /// Assembles a store from already-loaded parts, checking that they agree
    pub fn from_parts(matrix: SimilarityMatrix, movies: Vec<MovieRecord>) -> Result<Self, StartupError> {
        if matrix.dim() != movies.len() {
            return Err(StartupError::DimensionMismatch {
                matrix_rows: matrix.dim(),
                movies: movies.len(),
            });
        }

        let normalized: Vec<NormalizedTitle> = movies
            .iter()
            .map(|movie| normalize(&movie.original_title))
            .collect();
        let index = TitleIndex::build(&normalized);

        if index.collisions() > 0 {
            tracing::warn!(
                collisions = index.collisions(),
                "Some titles share a normalized key; only the last row of each is reachable by exact lookup"
            );
        }

        tracing::info!(
            movies = movies.len(),
            indexed_titles = index.len(),
            "Model assets loaded"
        );

        Ok(Self {
            matrix,
            movies,
            normalized,
            index,
        })
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    /// Movies paired with their normalized titles, in table order
    pub fn titles(&self) -> impl Iterator<Item = (&MovieRecord, &NormalizedTitle)> {
        self.movies.iter().zip(self.normalized.iter())
    }

    pub fn movie(&self, row: usize) -> Option<&MovieRecord> {
        self.movies.get(row)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

use serde::{Deserialize, Serialize};

pub mod title;

pub use title::{normalize, NormalizedTitle};

/// One row of the movie metadata table
///
/// The row's position in the table is its identity: it is the row and column
/// of this movie in the similarity matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Display title
    pub original_title: String,
}

impl MovieRecord {
    pub fn new(original_title: impl Into<String>) -> Self {
        Self {
            original_title: original_title.into(),
        }
    }
}

/// Successful recommendation lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    /// Title exactly as the caller sent it
    pub input_title: String,
    /// Display titles, most similar first
    pub recommendations: Vec<String>,
}

/// Lookup outcome for a title that is not in the index
#[derive(Debug, Clone, PartialEq)]
pub struct MovieNotFound {
    pub input_title: String,
    /// Close matches among the normalized index keys, best first
    pub suggestions: Vec<String>,
}

impl std::fmt::Display for MovieNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Movie not found: {}", self.input_title)
    }
}

/// Wire form of [`MovieNotFound`]
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub suggestions: Vec<String>,
    pub input_title: String,
}

impl From<MovieNotFound> for NotFoundResponse {
    fn from(not_found: MovieNotFound) -> Self {
        Self {
            error: "Movie not found",
            suggestions: not_found.suggestions,
            input_title: not_found.input_title,
        }
    }
}

/// Autocomplete search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub matches: Vec<String>,
}

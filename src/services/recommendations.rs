use ndarray::ArrayView1;

use crate::{
    assets::AssetStore,
    error::{AppError, AppResult},
    models::{normalize, MovieNotFound, NormalizedTitle, RecommendationResult},
    services::suggestions::{suggest, SUGGESTION_CUTOFF, SUGGESTION_LIMIT},
};

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: i64 = 5;

/// Result of resolving a normalized title against the index
#[derive(Debug, Clone, PartialEq)]
pub enum TitleMatch {
    /// Row index of the matching movie
    Found(usize),
    /// Close index keys, best first (possibly empty)
    NotFound(Vec<NormalizedTitle>),
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Found(RecommendationResult),
    NotFound(MovieNotFound),
}

/// Looks up a normalized title, falling back to fuzzy suggestions
pub fn resolve_title(assets: &AssetStore, key: &NormalizedTitle) -> TitleMatch {
    match assets.index().get(key) {
        Some(row) => TitleMatch::Found(row),
        None => TitleMatch::NotFound(suggest(
            key,
            assets.index().keys(),
            SUGGESTION_LIMIT,
            SUGGESTION_CUTOFF,
        )),
    }
}

/// Orders every row by descending score and returns the `top_n` rows after
/// the first
///
/// The first row after sorting is the query movie itself. Equal scores keep
/// their row order.
pub fn rank_similar(scores: ArrayView1<'_, f64>, top_n: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked.into_iter().skip(1).take(top_n).map(|(row, _)| row).collect()
}

/// Recommends the movies most similar to `raw_title`
///
/// A title missing from the index is not an error: it produces
/// [`Recommendation::NotFound`] with up to three suggestions. A non-positive
/// `top_n` yields an empty list.
pub fn recommend(assets: &AssetStore, raw_title: &str, top_n: i64) -> AppResult<Recommendation> {
    let key = normalize(raw_title);

    let row = match resolve_title(assets, &key) {
        TitleMatch::Found(row) => row,
        TitleMatch::NotFound(suggestions) => {
            tracing::debug!(key = %key, suggestions = suggestions.len(), "Title not in index");
            return Ok(Recommendation::NotFound(MovieNotFound {
                input_title: raw_title.to_string(),
                suggestions: suggestions.into_iter().map(NormalizedTitle::into_string).collect(),
            }));
        }
    };

    let top_n = usize::try_from(top_n).unwrap_or(0);

    let scores = assets
        .matrix()
        .row(row)
        .ok_or_else(|| AppError::Internal(format!("no similarity scores for row {}", row)))?;

    let recommendations = rank_similar(scores, top_n)
        .into_iter()
        .map(|similar| {
            assets
                .movie(similar)
                .map(|movie| movie.original_title.clone())
                .ok_or_else(|| AppError::Internal(format!("no metadata for row {}", similar)))
        })
        .collect::<AppResult<Vec<String>>>()?;

    Ok(Recommendation::Found(RecommendationResult {
        input_title: raw_title.to_string(),
        recommendations,
    }))
}

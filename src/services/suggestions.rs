use strsim::normalized_levenshtein;

use crate::models::NormalizedTitle;

/// Default number of suggestions offered for an unknown title
pub const SUGGESTION_LIMIT: usize = 3;

/// Minimum similarity ratio a candidate needs to be suggested
pub const SUGGESTION_CUTOFF: f64 = 0.6;

/// Similarity ratio in `[0, 1]` between two normalized titles
pub fn similarity_ratio(a: &NormalizedTitle, b: &NormalizedTitle) -> f64 {
    normalized_levenshtein(a.as_str(), b.as_str())
}

/// Returns up to `limit` candidates that closely match `key`
///
/// Candidates scoring below `cutoff` are discarded. The rest are ordered by
/// descending score; equal scores keep their order in `candidates`.
pub fn suggest<'a, I>(key: &NormalizedTitle, candidates: I, limit: usize, cutoff: f64) -> Vec<NormalizedTitle>
where
    I: IntoIterator<Item = &'a NormalizedTitle>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(&NormalizedTitle, f64)> = candidates
        .into_iter()
        .map(|candidate| (candidate, similarity_ratio(key, candidate)))
        .filter(|(_, score)| *score >= cutoff)
        .collect();

    // Stable sort keeps candidate order for ties
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .map(|(candidate, _)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::normalize;

    fn keys(titles: &[&str]) -> Vec<NormalizedTitle> {
        titles.iter().map(|title| normalize(title)).collect()
    }

    #[test]
    fn test_identical_titles_score_one() {
        let title = normalize("The Matrix");
        assert_eq!(similarity_ratio(&title, &title), 1.0);
    }

    #[test]
    fn test_disjoint_titles_score_near_zero() {
        assert!(similarity_ratio(&normalize("abc"), &normalize("xyz")) < 0.1);
    }

    #[test]
    fn test_close_misspelling_is_suggested_first() {
        let candidates = keys(&["Heat", "The Matrix Reloaded", "The Matrix", "Alien"]);
        let suggestions = suggest(
            &normalize("the matrx"),
            &candidates,
            SUGGESTION_LIMIT,
            SUGGESTION_CUTOFF,
        );

        assert_eq!(suggestions.first().map(|s| s.as_str()), Some("the matrix"));
        assert!(!suggestions.iter().any(|s| s.as_str() == "heat"));
    }

    #[test]
    fn test_limit_and_tie_order() {
        // All four are one edit away from "cars"
        let candidates = keys(&["carz", "bars", "cats", "care"]);
        let suggestions = suggest(&normalize("cars"), &candidates, 3, SUGGESTION_CUTOFF);

        let suggestions: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();
        assert_eq!(suggestions, vec!["carz", "bars", "cats"]);
    }

    #[test]
    fn test_nothing_above_cutoff() {
        let candidates = keys(&["Heat", "Alien", "Ronin"]);
        let suggestions = suggest(
            &normalize("zzz-not-a-real-movie-xyz"),
            &candidates,
            SUGGESTION_LIMIT,
            SUGGESTION_CUTOFF,
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let candidates = keys(&["Heat"]);
        assert!(suggest(&normalize("heat"), &candidates, 0, 0.0).is_empty());
    }
}

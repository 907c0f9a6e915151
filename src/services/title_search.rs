use crate::{assets::AssetStore, models::normalize};

/// Maximum number of titles returned by a search
pub const MAX_MATCHES: usize = 10;

/// Substring search over display titles for autocomplete
///
/// Matches compare normalized forms and come back in table order.
pub fn search_titles(assets: &AssetStore, raw_query: &str) -> Vec<String> {
    let query = normalize(raw_query);

    assets
        .titles()
        .filter(|(_, normalized)| normalized.contains(&query))
        .take(MAX_MATCHES)
        .map(|(movie, _)| movie.original_title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assets::SimilarityMatrix,
        models::MovieRecord,
    };
    use ndarray::Array2;

    fn store(titles: &[String]) -> AssetStore {
        let movies: Vec<MovieRecord> = titles.iter().map(MovieRecord::new).collect();
        let matrix = SimilarityMatrix::new(Array2::eye(movies.len())).unwrap();
        AssetStore::from_parts(matrix, movies).unwrap()
    }

    #[test]
    fn test_matches_in_table_order() {
        let titles: Vec<String> = ["Spider-Man", "Heat", "The Amazing Spider-Man", "Spiders"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let assets = store(&titles);

        assert_eq!(
            search_titles(&assets, "spider"),
            vec!["Spider-Man", "The Amazing Spider-Man", "Spiders"]
        );
    }

    #[test]
    fn test_query_is_normalized() {
        let titles = vec!["Amélie".to_string(), "Amadeus".to_string()];
        let assets = store(&titles);

        assert_eq!(search_titles(&assets, "AMÉL"), vec!["Amélie"]);
    }

    #[test]
    fn test_caps_at_ten_matches() {
        let titles: Vec<String> = (1..=15).map(|n| format!("Spider Story {}", n)).collect();
        let assets = store(&titles);

        let matches = search_titles(&assets, "spider");
        assert_eq!(matches.len(), MAX_MATCHES);
        assert_eq!(matches[0], "Spider Story 1");
        assert_eq!(matches[9], "Spider Story 10");
    }

    #[test]
    fn test_duplicate_titles_are_preserved() {
        let titles = vec!["Solaris".to_string(), "Solaris".to_string()];
        let assets = store(&titles);

        assert_eq!(search_titles(&assets, "sol"), vec!["Solaris", "Solaris"]);
    }

    #[test]
    fn test_no_match() {
        let titles = vec!["Heat".to_string()];
        assert!(search_titles(&store(&titles), "spider").is_empty());
    }
}

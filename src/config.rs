use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// Prefix shared by every configuration variable
pub const ENV_PREFIX: &str = "MOVIE_RECS_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Precomputed similarity matrix (`.npy`)
    #[serde(default = "default_similarity_matrix_path")]
    pub similarity_matrix_path: PathBuf,

    /// Movie metadata table (CSV with an `original_title` column)
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,

    /// Directory served under `/static`; an empty value disables it
    #[serde(default = "default_static_dir", deserialize_with = "non_empty_path")]
    pub static_dir: Option<PathBuf>,

    /// Page served at `/`; an empty value disables it
    #[serde(default = "default_index_file", deserialize_with = "non_empty_path")]
    pub index_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_similarity_matrix_path() -> PathBuf {
    PathBuf::from("model/cosine_sim.npy")
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("data/movie_metadata.csv")
}

fn default_static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("static"))
}

fn default_index_file() -> Option<PathBuf> {
    Some(PathBuf::from("templates/index.html"))
}

fn non_empty_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from))
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[("HOST", "ignored-without-prefix")])).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.similarity_matrix_path, PathBuf::from("model/cosine_sim.npy"));
        assert_eq!(config.metadata_path, PathBuf::from("data/movie_metadata.csv"));
        assert_eq!(config.static_dir, Some(PathBuf::from("static")));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("MOVIE_RECS_HOST", "0.0.0.0"),
            ("MOVIE_RECS_PORT", "9090"),
            ("MOVIE_RECS_METADATA_PATH", "/srv/movies.csv"),
            ("MOVIE_RECS_INDEX_FILE", "/srv/index.html"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.metadata_path, PathBuf::from("/srv/movies.csv"));
        assert_eq!(config.index_file, Some(PathBuf::from("/srv/index.html")));
    }

    #[test]
    fn test_empty_static_paths_disable_them() {
        let config = Config::from_vars(vars(&[
            ("MOVIE_RECS_STATIC_DIR", ""),
            ("MOVIE_RECS_INDEX_FILE", "  "),
        ]))
        .unwrap();

        assert_eq!(config.static_dir, None);
        assert_eq!(config.index_file, None);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_vars(vars(&[("MOVIE_RECS_PORT", "not-a-port")])).is_err());
    }
}

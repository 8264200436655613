use std::env;
use std::time::Duration;

use crate::google_books::{DEFAULT_BASE_URL, DEFAULT_MAX_RESULTS, clamp_max_results};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub google_books_url: String,
    pub google_books_api_key: Option<String>,
    pub max_results: u32,
    pub search_timeout: Option<Duration>,
    pub static_dir: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (process env, test maps)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_blank("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            google_books_url: non_blank("GOOGLE_BOOKS_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            google_books_api_key: non_blank("GOOGLE_BOOKS_API_KEY"),
            max_results: non_blank("SHELFIE_MAX_RESULTS")
                .and_then(|n| n.parse().ok())
                .map(clamp_max_results)
                .unwrap_or(DEFAULT_MAX_RESULTS),
            search_timeout: non_blank("SHELFIE_SEARCH_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
            static_dir: non_blank("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            cors_allowed_origins: non_blank("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }
}

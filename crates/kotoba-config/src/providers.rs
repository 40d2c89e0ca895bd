use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// RapidAPI key for the stroke-order API. Empty when unset; visual
    /// lookups then degrade per-call instead of failing startup.
    pub rapidapi_key: String,
    pub jisho_url: String,
    pub kanji_url: String,
    pub request_timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new() -> Self {
        let rapidapi_key = env::var("RAPIDAPI_KEY").unwrap_or_default();

        let jisho_url = env::var("JISHO_API_URL")
            .unwrap_or_else(|_| "https://jisho.org/api/v1/search/words".to_string());

        let kanji_url = env::var("KANJI_API_URL").unwrap_or_else(|_| {
            "https://kanjialive-api.p.rapidapi.com/api/public/kanji".to_string()
        });

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10); // 10 seconds default

        Self {
            rapidapi_key,
            jisho_url,
            kanji_url,
            request_timeout_secs,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

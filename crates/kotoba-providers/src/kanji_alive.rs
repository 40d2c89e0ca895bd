//! KanjiAlive stroke-order client.
//!
//! The API answers 200 for both hits and misses; a miss is a sentinel
//! `{"error": "No kanji found."}` body, so the outcome is decided by
//! inspecting the payload rather than the status code.

use std::time::Duration;

use serde_json::Value;

use kotoba_core::error::ProviderError;
use kotoba_core::provider::{CharacterAsset, VisualProvider};

#[derive(Clone)]
pub struct KanjiAliveClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl KanjiAliveClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl VisualProvider for KanjiAliveClient {
    async fn strokes(&self, glyph: char) -> Result<Option<CharacterAsset>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError("RapidAPI key is not configured".to_string()));
        }

        let url = format!("{}/{glyph}", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProviderError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError(format!("HTTP {}", response.status())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError(format!("failed to parse kanji response: {e}")))?;

        asset_from_body(&body)
    }
}

fn asset_from_body(body: &Value) -> Result<Option<CharacterAsset>, ProviderError> {
    if body.get("error").is_some() {
        return Ok(None);
    }

    let video = &body["kanji"]["video"];
    match (video["poster"].as_str(), video["mp4"].as_str()) {
        (Some(poster), Some(mp4)) => Ok(Some(CharacterAsset {
            image_url: poster.to_string(),
            stroke_url: mp4.to_string(),
        })),
        _ => Err(ProviderError(
            "unexpected kanji response shape".to_string(),
        )),
    }
}

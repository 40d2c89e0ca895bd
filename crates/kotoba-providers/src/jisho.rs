//! Jisho word-search client.
//!
//! One GET per lookup with the keyword quoted for exact-phrase matching.
//! A non-success status or a non-JSON content type is treated as "no
//! result", matching how jisho.org reports garbage input.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use kotoba_core::error::ProviderError;
use kotoba_core::provider::{LexicalCandidate, LexicalProvider};

const WORD_URL_BASE: &str = "https://jisho.org/word";

#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl JishoClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }
}

/// Result page holding the candidate at `index`. Indices 0..19 land on
/// page 1; beyond that the page is the index over the page size.
fn page_for(index: usize) -> usize {
    if index == 0 { 1 } else { index / 20 }
}

#[async_trait::async_trait]
impl LexicalProvider for JishoClient {
    async fn search(
        &self,
        keyword: &str,
        sense_index: usize,
    ) -> Result<Option<LexicalCandidate>, ProviderError> {
        let page = page_for(sense_index);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("keyword", format!("\"{keyword}\"")),
                ("page", page.to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProviderError(e.to_string()))?;

        if !response.status().is_success() || !is_json(&response) {
            tracing::debug!(
                keyword = %keyword,
                status = %response.status(),
                "dictionary gave no usable response"
            );
            return Ok(None);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError(format!("failed to parse dictionary response: {e}")))?;

        Ok(candidate_at(body, sense_index))
    }
}

fn is_json(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn candidate_at(response: SearchResponse, index: usize) -> Option<LexicalCandidate> {
    let candidate = response.data.into_iter().nth(index)?;

    let reading = candidate
        .japanese
        .first()
        .and_then(|form| form.reading.clone())
        .unwrap_or_default();
    let (parts_of_speech, english) = candidate
        .senses
        .into_iter()
        .next()
        .map(|sense| (sense.parts_of_speech, sense.english_definitions))
        .unwrap_or_default();

    Some(LexicalCandidate {
        source_link: format!("{WORD_URL_BASE}/{}", candidate.slug),
        word: candidate.slug,
        reading,
        parts_of_speech,
        english,
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    slug: String,
    #[serde(default)]
    japanese: Vec<JapaneseForm>,
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Debug, Default, Deserialize)]
struct JapaneseForm {
    #[serde(default)]
    reading: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Sense {
    #[serde(default)]
    parts_of_speech: Vec<String>,
    #[serde(default)]
    english_definitions: Vec<String>,
}

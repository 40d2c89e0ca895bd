use std::sync::Arc;

use crate::error::{LookupError, StoreError};
use crate::kana;
use crate::preprocess;
use crate::provider::{LexicalProvider, VisualProvider};
use crate::store::CacheStore;
use crate::types::{CharacterEntry, LookupResult, WordCharacterLink, WordEntry};

/// Lookup orchestrator.
///
/// Drives the cache-then-fetch flow for one keyword: cache check, lexical
/// resolution on miss, per-glyph visual resolution keyed by the canonical
/// word, and a final assembly read. The store and both providers are
/// injected at construction and shared across lookups.
pub struct Lookup {
    store: Arc<dyn CacheStore>,
    lexical: Arc<dyn LexicalProvider>,
    visual: Arc<dyn VisualProvider>,
}

impl Lookup {
    pub fn new(
        store: Arc<dyn CacheStore>,
        lexical: Arc<dyn LexicalProvider>,
        visual: Arc<dyn VisualProvider>,
    ) -> Self {
        Self {
            store,
            lexical,
            visual,
        }
    }

    /// Resolve a keyword to a word and its ordered kanji.
    ///
    /// A cached keyword short-circuits all network calls. On a miss the
    /// dictionary provider is queried at `sense_index` (0 = best match);
    /// no candidate, or any provider failure, ends the lookup with
    /// [`LookupError::NotFound`]. Failed per-glyph visual lookups degrade
    /// the result instead of failing it. The returned data is always
    /// re-read from the store rather than trusting state accumulated
    /// while fetching.
    pub async fn lookup(
        &self,
        keyword: &str,
        sense_index: usize,
    ) -> Result<LookupResult, LookupError> {
        let keyword = preprocess::normalize(keyword);

        match self.store.get_word(&keyword).await? {
            Some(entry) => {
                tracing::debug!(keyword = %keyword, word = %entry.word, "cache hit");
            }
            None => self.resolve(&keyword, sense_index).await?,
        }

        // Assembly re-reads the store as the source of truth; a racing
        // lookup may have committed rows this one lost on.
        let entry = self
            .store
            .get_word(&keyword)
            .await?
            .ok_or_else(|| LookupError::NotFound(keyword.clone()))?;
        let characters = self.store.links_for_word(&entry.word).await?;

        Ok(LookupResult {
            word: entry,
            characters,
        })
    }

    /// Cache-miss path: query the dictionary, persist the word, and
    /// decompose it unless a synonym lookup already did.
    async fn resolve(&self, keyword: &str, sense_index: usize) -> Result<(), LookupError> {
        let candidate = match self.lexical.search(keyword, sense_index).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => return Err(LookupError::NotFound(keyword.to_string())),
            Err(e) => {
                tracing::warn!(keyword = %keyword, error = %e, "dictionary provider failed");
                return Err(LookupError::NotFound(keyword.to_string()));
            }
        };

        let entry = WordEntry {
            keyword: keyword.to_string(),
            word: candidate.word,
            reading: candidate.reading,
            parts_of_speech: candidate.parts_of_speech,
            english: candidate.english,
            source_link: candidate.source_link,
        };

        match self.store.put_word(&entry).await {
            Ok(()) => {}
            Err(StoreError::Duplicate(_)) => {
                tracing::debug!(keyword = %keyword, "word committed by a concurrent lookup");
            }
            Err(e) => return Err(e.into()),
        }

        // Synonym sharing: a different keyword may have resolved to this
        // word already and paid for its decomposition.
        if !self.store.has_links(&entry.word).await? {
            let linked = self.decompose(&entry.word).await?;
            if linked == 0 {
                tracing::info!(word = %entry.word, "word contains no resolvable kanji");
            }
        }

        Ok(())
    }

    /// Walk the word's glyphs in reading order, resolving each kanji and
    /// linking it at the next position. Returns the number of links made.
    async fn decompose(&self, word: &str) -> Result<u32, StoreError> {
        let mut position = 0u32;

        for glyph in word.chars() {
            if kana::is_phonetic(glyph) {
                continue;
            }

            let resolved = match self.store.get_character(glyph).await? {
                Some(_) => true,
                None => self.fetch_character(glyph).await?,
            };
            if !resolved {
                // Skipped glyphs leave no gap in the position sequence.
                continue;
            }

            let link = WordCharacterLink {
                word: word.to_string(),
                glyph,
                position,
            };
            match self.store.put_link(&link).await {
                Ok(()) => position += 1,
                // Repeated glyph within the word, or a racing lookup got
                // here first; either way the position slot stays unused.
                Err(StoreError::Duplicate(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(position)
    }

    /// Fetch and persist assets for one glyph. Returns false when the
    /// glyph could not be resolved; the caller skips it without failing
    /// the word.
    async fn fetch_character(&self, glyph: char) -> Result<bool, StoreError> {
        let asset = match self.visual.strokes(glyph).await {
            Ok(Some(asset)) => asset,
            Ok(None) => {
                tracing::info!(%glyph, "no stroke data for glyph");
                return Ok(false);
            }
            Err(e) => {
                tracing::warn!(%glyph, error = %e, "stroke provider failed for glyph");
                return Ok(false);
            }
        };

        let entry = CharacterEntry {
            glyph,
            image_url: asset.image_url,
            stroke_url: asset.stroke_url,
        };
        match self.store.put_character(&entry).await {
            Ok(()) => Ok(true),
            Err(StoreError::Duplicate(_)) => Ok(true),
            Err(e) => Err(e),
        }
    }
}

//! Scripted in-memory doubles for the store and both providers, with
//! call counters for the network-silence assertions.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{ProviderError, StoreError};
use crate::provider::{CharacterAsset, LexicalCandidate, LexicalProvider, VisualProvider};
use crate::store::CacheStore;
use crate::types::{CharacterEntry, WordCharacterLink, WordEntry};

#[derive(Default)]
struct MemoryInner {
    words: Vec<WordEntry>,
    characters: HashMap<char, CharacterEntry>,
    links: Vec<WordCharacterLink>,
}

/// In-memory `CacheStore` enforcing the same uniqueness rules as the
/// SQLite implementation.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
    pub writes: AtomicUsize,
}

#[async_trait::async_trait]
impl CacheStore for MemoryStore {
    async fn get_word(&self, keyword: &str) -> Result<Option<WordEntry>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.words.iter().find(|w| w.keyword == keyword).cloned())
    }

    async fn put_word(&self, entry: &WordEntry) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .words
            .iter()
            .any(|w| w.keyword == entry.keyword && w.word == entry.word)
        {
            return Err(StoreError::Duplicate(format!(
                "({}, {})",
                entry.keyword, entry.word
            )));
        }
        inner.words.push(entry.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_character(&self, glyph: char) -> Result<Option<CharacterEntry>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.characters.get(&glyph).cloned())
    }

    async fn put_character(&self, entry: &CharacterEntry) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.characters.contains_key(&entry.glyph) {
            return Err(StoreError::Duplicate(entry.glyph.to_string()));
        }
        inner.characters.insert(entry.glyph, entry.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn links_for_word(&self, word: &str) -> Result<Vec<CharacterEntry>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut links: Vec<&WordCharacterLink> =
            inner.links.iter().filter(|l| l.word == word).collect();
        links.sort_by_key(|l| l.position);
        Ok(links
            .into_iter()
            .filter_map(|l| inner.characters.get(&l.glyph).cloned())
            .collect())
    }

    async fn put_link(&self, link: &WordCharacterLink) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .links
            .iter()
            .any(|l| l.word == link.word && l.glyph == link.glyph)
        {
            return Err(StoreError::Duplicate(format!(
                "({}, {})",
                link.word, link.glyph
            )));
        }
        inner.links.push(link.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn has_links(&self, word: &str) -> Result<bool, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.links.iter().any(|l| l.word == word))
    }
}

impl MemoryStore {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn link_positions(&self, word: &str) -> Vec<u32> {
        let inner = self.inner.lock().unwrap();
        let mut positions: Vec<u32> = inner
            .links
            .iter()
            .filter(|l| l.word == word)
            .map(|l| l.position)
            .collect();
        positions.sort_unstable();
        positions
    }
}

/// Dictionary double answering from a fixed keyword -> candidate table.
#[derive(Default)]
pub struct ScriptedLexical {
    candidates: HashMap<String, LexicalCandidate>,
    pub calls: AtomicUsize,
}

impl ScriptedLexical {
    pub fn with(mut self, keyword: &str, candidate: LexicalCandidate) -> Self {
        self.candidates.insert(keyword.to_string(), candidate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LexicalProvider for ScriptedLexical {
    async fn search(
        &self,
        keyword: &str,
        _sense_index: usize,
    ) -> Result<Option<LexicalCandidate>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.candidates.get(keyword).cloned())
    }
}

/// Stroke-order double; glyphs can be scripted to answer, answer the
/// not-found sentinel, or fail at the transport level.
#[derive(Default)]
pub struct ScriptedVisual {
    assets: HashMap<char, CharacterAsset>,
    failing: HashSet<char>,
    pub calls: AtomicUsize,
}

impl ScriptedVisual {
    pub fn with(mut self, glyph: char) -> Self {
        self.assets.insert(glyph, asset_for(glyph));
        self
    }

    pub fn with_failure(mut self, glyph: char) -> Self {
        self.failing.insert(glyph);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl VisualProvider for ScriptedVisual {
    async fn strokes(&self, glyph: char) -> Result<Option<CharacterAsset>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&glyph) {
            return Err(ProviderError(format!("connection reset for {glyph}")));
        }
        Ok(self.assets.get(&glyph).cloned())
    }
}

pub fn candidate(word: &str, reading: &str, glosses: &[&str]) -> LexicalCandidate {
    LexicalCandidate {
        word: word.to_string(),
        reading: reading.to_string(),
        parts_of_speech: vec!["Ichidan verb".to_string()],
        english: glosses.iter().map(|g| g.to_string()).collect(),
        source_link: format!("https://jisho.org/word/{word}"),
    }
}

pub fn asset_for(glyph: char) -> CharacterAsset {
    CharacterAsset {
        image_url: format!("https://media.example/{glyph}/poster.png"),
        stroke_url: format!("https://media.example/{glyph}/strokes.mp4"),
    }
}

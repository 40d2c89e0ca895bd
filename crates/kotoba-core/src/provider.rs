use crate::error::ProviderError;

/// Best-matching dictionary candidate for a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalCandidate {
    /// Canonical headword slug.
    pub word: String,
    pub reading: String,
    pub parts_of_speech: Vec<String>,
    pub english: Vec<String>,
    /// Canonical URL to the provider's page for the headword.
    pub source_link: String,
}

/// Visual assets for one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterAsset {
    pub image_url: String,
    pub stroke_url: String,
}

/// Dictionary word-search provider.
#[async_trait::async_trait]
pub trait LexicalProvider: Send + Sync {
    /// Query for a keyword, selecting the `sense_index`-th ranked
    /// candidate. `Ok(None)` means the provider answered but had no match
    /// at that index.
    async fn search(
        &self,
        keyword: &str,
        sense_index: usize,
    ) -> Result<Option<LexicalCandidate>, ProviderError>;
}

/// Per-character stroke-order provider.
#[async_trait::async_trait]
pub trait VisualProvider: Send + Sync {
    /// Query assets for a single glyph. `Ok(None)` means the provider
    /// answered with its "no kanji found" sentinel.
    async fn strokes(&self, glyph: char) -> Result<Option<CharacterAsset>, ProviderError>;
}

use crate::error::StoreError;
use crate::types::{CharacterEntry, WordCharacterLink, WordEntry};

/// Durable cache surface over the three record sets: words, characters,
/// and the ordered word-to-character links.
///
/// All rows are append-only. Every `put_*` reports an already-committed
/// primary key as [`StoreError::Duplicate`]; under concurrent lookups the
/// loser of a write race sees `Duplicate` and proceeds to read, so
/// at-most-one committed row per key holds without any external locking.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    /// Word previously resolved for this raw keyword, if any.
    async fn get_word(&self, keyword: &str) -> Result<Option<WordEntry>, StoreError>;

    /// Insert a resolved word. Fails with `Duplicate` if (keyword, word)
    /// is already present.
    async fn put_word(&self, entry: &WordEntry) -> Result<(), StoreError>;

    /// Cached visual assets for a glyph, if any.
    async fn get_character(&self, glyph: char) -> Result<Option<CharacterEntry>, StoreError>;

    /// Insert character assets. Fails with `Duplicate` if the glyph is
    /// already present.
    async fn put_character(&self, entry: &CharacterEntry) -> Result<(), StoreError>;

    /// Character entries linked to a canonical word, ordered by position
    /// ascending. Links whose character row is missing are dropped.
    async fn links_for_word(&self, word: &str) -> Result<Vec<CharacterEntry>, StoreError>;

    /// Insert one link. Fails with `Duplicate` if (word, glyph) is already
    /// present.
    async fn put_link(&self, link: &WordCharacterLink) -> Result<(), StoreError>;

    /// Whether any decomposition links exist for this canonical word.
    /// True when a prior lookup (possibly via a synonym keyword) already
    /// decomposed it.
    async fn has_links(&self, word: &str) -> Result<bool, StoreError>;
}

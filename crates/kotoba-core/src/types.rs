use serde::{Deserialize, Serialize};

/// One resolved dictionary result, cached forever under its raw keyword.
///
/// `word` is the provider's canonical headword and may differ from
/// `keyword` (synonyms, alternate spellings). Several keywords may map to
/// the same `word` without duplicating character data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub keyword: String,
    pub word: String,
    pub reading: String,
    pub parts_of_speech: Vec<String>,
    pub english: Vec<String>,
    pub source_link: String,
}

/// Cached visual assets for a single kanji glyph, unique per glyph across
/// the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub glyph: char,
    pub image_url: String,
    pub stroke_url: String,
}

/// Ordered association between a canonical word and one of its kanji.
///
/// Positions for a word are contiguous from 0 in left-to-right reading
/// order, counting only glyphs that resolved to a character entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCharacterLink {
    pub word: String,
    pub glyph: char,
    pub position: u32,
}

/// Fully assembled lookup outcome: the word and its resolved kanji in
/// reading order. `characters` is empty for kana-only words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub word: WordEntry,
    pub characters: Vec<CharacterEntry>,
}

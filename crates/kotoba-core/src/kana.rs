//! Glyph classification for word decomposition.
//!
//! Kana carry no stroke-order data of interest; only glyphs outside the
//! two phonetic ranges are sent to the visual provider.

pub const HIRAGANA_FIRST: char = '\u{3041}';
pub const HIRAGANA_LAST: char = '\u{309F}';
pub const KATAKANA_FIRST: char = '\u{30A0}';
pub const KATAKANA_LAST: char = '\u{30FF}';

/// True if the glyph lies in either standard kana block.
pub fn is_phonetic(glyph: char) -> bool {
    (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&glyph)
        || (KATAKANA_FIRST..=KATAKANA_LAST).contains(&glyph)
}

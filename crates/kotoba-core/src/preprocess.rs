use unicode_normalization::UnicodeNormalization;

/// Normalize a raw keyword before it touches the cache or a provider.
///
/// NFKC folds full-width Latin and half-width katakana into their
/// canonical forms so equivalent inputs share cache rows.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();
    text.replace(['\n', '\r'], "").trim().to_string()
}

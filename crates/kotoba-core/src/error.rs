/// Cache store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row with the same primary key is already committed. Callers treat
    /// this as "someone else already cached it" and fall back to a read.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Transport-level failure or unexpected response shape from a provider.
#[derive(Debug, thiserror::Error)]
#[error("provider unavailable: {0}")]
pub struct ProviderError(pub String);

/// Terminal outcome of a lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The dictionary provider had no match for the keyword, or could not
    /// be reached at all.
    #[error("no dictionary match for \"{0}\"")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

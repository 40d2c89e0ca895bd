pub mod error;
pub mod kana;
pub mod lookup;
pub mod preprocess;
pub mod provider;
pub mod store;
pub mod types;

pub use error::{LookupError, ProviderError, StoreError};
pub use lookup::Lookup;
pub use provider::{CharacterAsset, LexicalCandidate, LexicalProvider, VisualProvider};
pub use store::CacheStore;
pub use types::{CharacterEntry, LookupResult, WordCharacterLink, WordEntry};

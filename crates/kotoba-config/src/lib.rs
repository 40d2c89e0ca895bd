use serde::{Deserialize, Serialize};

use self::providers::ProviderConfig;
use self::store::StoreConfig;

pub mod providers;
pub mod store;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub providers: ProviderConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Build configuration from the process environment, falling back to
    /// defaults for everything but the API key.
    pub fn new() -> Self {
        Config {
            providers: ProviderConfig::new(),
            store: StoreConfig::new(),
        }
    }
}

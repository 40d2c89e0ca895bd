use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite cache database file.
    pub db_path: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let db_path = env::var("KOTOBA_DB").unwrap_or_else(|_| "db/kotoba.db".to_string());

        Self { db_path }
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.db_path)
    }
}

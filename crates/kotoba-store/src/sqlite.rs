//! SQLite-backed cache store.
//!
//! Three append-only tables: `words` keyed by (keyword, word),
//! `characters` keyed by glyph, and `word_characters` keyed by
//! (word, glyph) with an explicit position column. Uniqueness races
//! surface as [`StoreError::Duplicate`]; everything else maps to
//! [`StoreError::Backend`].

use std::path::Path;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::info;

use kotoba_core::error::StoreError;
use kotoba_core::store::CacheStore;
use kotoba_core::types::{CharacterEntry, WordCharacterLink, WordEntry};

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database file and run the idempotent
    /// schema setup. Failure here is fatal to the host process.
    pub async fn connect(db_path: &Path) -> Result<Self, sqlx::Error> {
        let newly_created = !db_path.exists();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        if newly_created {
            info!("initialized new cache database: {}", db_path.display());
        } else {
            info!("opened existing cache database: {}", db_path.display());
        }

        Self::setup(pool).await
    }

    /// Private in-memory database, one connection so all queries see the
    /// same data.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::setup(pool).await
    }

    async fn setup(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
        // WAL keeps concurrent lookups from serializing on the whole file.
        sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
        sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS words (
                keyword TEXT NOT NULL,
                word TEXT NOT NULL,
                reading TEXT NOT NULL,
                parts_of_speech TEXT NOT NULL,
                english TEXT NOT NULL,
                source_link TEXT NOT NULL,
                PRIMARY KEY (keyword, word)
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS characters (
                glyph TEXT PRIMARY KEY,
                image_url TEXT NOT NULL,
                stroke_url TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS word_characters (
                word TEXT NOT NULL,
                glyph TEXT NOT NULL,
                position INTEGER NOT NULL,
                PRIMARY KEY (word, glyph)
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn write_error(e: sqlx::Error, key: &str) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Duplicate(key.to_string())
        }
        _ => StoreError::Backend(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn encode_list(items: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|e| StoreError::Backend(e.to_string()))
}

fn decode_list(text: &str) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Backend(e.to_string()))
}

fn decode_glyph(text: &str) -> Result<char, StoreError> {
    text.chars()
        .next()
        .ok_or_else(|| StoreError::Backend("empty glyph column".to_string()))
}

#[async_trait::async_trait]
impl CacheStore for SqliteStore {
    async fn get_word(&self, keyword: &str) -> Result<Option<WordEntry>, StoreError> {
        let row = sqlx::query(
            "SELECT keyword, word, reading, parts_of_speech, english, source_link
             FROM words WHERE keyword = ?1 LIMIT 1",
        )
        .bind(keyword)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        row.map(|row| {
            Ok(WordEntry {
                keyword: row.get("keyword"),
                word: row.get("word"),
                reading: row.get("reading"),
                parts_of_speech: decode_list(row.get::<String, _>("parts_of_speech").as_str())?,
                english: decode_list(row.get::<String, _>("english").as_str())?,
                source_link: row.get("source_link"),
            })
        })
        .transpose()
    }

    async fn put_word(&self, entry: &WordEntry) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO words (keyword, word, reading, parts_of_speech, english, source_link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&entry.keyword)
        .bind(&entry.word)
        .bind(&entry.reading)
        .bind(encode_list(&entry.parts_of_speech)?)
        .bind(encode_list(&entry.english)?)
        .bind(&entry.source_link)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &format!("({}, {})", entry.keyword, entry.word)))?;
        Ok(())
    }

    async fn get_character(&self, glyph: char) -> Result<Option<CharacterEntry>, StoreError> {
        let row = sqlx::query(
            "SELECT glyph, image_url, stroke_url FROM characters WHERE glyph = ?1",
        )
        .bind(glyph.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        row.map(|row| {
            Ok(CharacterEntry {
                glyph: decode_glyph(row.get::<String, _>("glyph").as_str())?,
                image_url: row.get("image_url"),
                stroke_url: row.get("stroke_url"),
            })
        })
        .transpose()
    }

    async fn put_character(&self, entry: &CharacterEntry) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO characters (glyph, image_url, stroke_url) VALUES (?1, ?2, ?3)")
            .bind(entry.glyph.to_string())
            .bind(&entry.image_url)
            .bind(&entry.stroke_url)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, &entry.glyph.to_string()))?;
        Ok(())
    }

    async fn links_for_word(&self, word: &str) -> Result<Vec<CharacterEntry>, StoreError> {
        // Inner join drops links whose character row is missing; the
        // character side of the relation is advisory.
        let rows = sqlx::query(
            "SELECT characters.glyph, characters.image_url, characters.stroke_url
             FROM word_characters JOIN characters
             ON word_characters.glyph = characters.glyph
             WHERE word_characters.word = ?1
             ORDER BY word_characters.position ASC",
        )
        .bind(word)
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(CharacterEntry {
                    glyph: decode_glyph(row.get::<String, _>("glyph").as_str())?,
                    image_url: row.get("image_url"),
                    stroke_url: row.get("stroke_url"),
                })
            })
            .collect()
    }

    async fn put_link(&self, link: &WordCharacterLink) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO word_characters (word, glyph, position) VALUES (?1, ?2, ?3)")
            .bind(&link.word)
            .bind(link.glyph.to_string())
            .bind(link.position as i64)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, &format!("({}, {})", link.word, link.glyph)))?;
        Ok(())
    }

    async fn has_links(&self, word: &str) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM word_characters WHERE word = ?1 LIMIT 1")
            .bind(word)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;
        Ok(row.is_some())
    }
}

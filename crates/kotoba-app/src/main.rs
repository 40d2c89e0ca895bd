use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kotoba_config::Config;
use kotoba_core::{Lookup, LookupError, LookupResult};
use kotoba_providers::{JishoClient, KanjiAliveClient};
use kotoba_store::SqliteStore;

/// Look up a Japanese word, with results cached locally.
#[derive(Parser)]
#[command(name = "kotoba")]
struct Args {
    /// Word or phrase to look up
    keyword: String,

    /// Pick the n-th ranked dictionary candidate instead of the best match
    #[arg(long, default_value_t = 0)]
    sense: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::new();

    if config.providers.rapidapi_key.is_empty() {
        tracing::warn!("RAPIDAPI_KEY is not set; stroke-order lookups will be skipped");
    }

    // A dead store means no lookup can be served at all.
    let store = SqliteStore::connect(&config.store.db_path())
        .await
        .context("failed to open cache database")?;

    let timeout = config.providers.request_timeout();
    let jisho = JishoClient::new(config.providers.jisho_url.clone(), timeout);
    let kanji = KanjiAliveClient::new(
        config.providers.kanji_url.clone(),
        config.providers.rapidapi_key.clone(),
        timeout,
    );

    let lookup = Lookup::new(Arc::new(store), Arc::new(jisho), Arc::new(kanji));

    match lookup.lookup(&args.keyword, args.sense).await {
        Ok(result) => {
            print!("{}", render(&result));
            Ok(ExitCode::SUCCESS)
        }
        Err(LookupError::NotFound(keyword)) => {
            eprintln!("No dictionary result for \"{keyword}\"");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("lookup failed"),
    }
}

/// Plain-text rendering of a lookup result: headword with its dictionary
/// link, reading, definitions, and per-kanji asset links when present.
fn render(result: &LookupResult) -> String {
    let word = &result.word;
    let mut out = format!("{} <{}>\n", word.word, word.source_link);

    if !word.reading.is_empty() {
        out.push_str(&format!("Reading: {}\n", word.reading));
    }
    out.push_str(&format!("English: {}\n", word.english.join("; ")));
    if !word.parts_of_speech.is_empty() {
        out.push_str(&format!(
            "Parts of speech: {}\n",
            word.parts_of_speech.join("; ")
        ));
    }

    for character in &result.characters {
        out.push_str(&format!(
            "{}  image: {}  strokes: {}\n",
            character.glyph, character.image_url, character.stroke_url
        ));
    }

    out
}

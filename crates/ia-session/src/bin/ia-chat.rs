//! Interactive chat over a JSON corpus.
//!
//! Usage: `ia-chat [CORPUS.json] [--tutor]`. Without a path the bundled
//! programming Q&A corpus is used. Commands: `/new`, `/stats`, `/quit`.

use anyhow::Context;
use ia_core::Corpus;
use ia_engine::{Assistant, Engine, EngineConfig};
use ia_session::{ChatSession, SessionConfig, SessionError};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_CORPUS: &str = include_str!("../../../../data/qa_corpus.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tutor = args.iter().any(|a| a == "--tutor");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let (corpus, report) = match path {
        Some(p) => Corpus::from_json_file(p).with_context(|| format!("loading corpus {p}"))?,
        None => Corpus::from_json_str(DEMO_CORPUS).context("loading bundled corpus")?,
    };
    tracing::info!(loaded = report.loaded, skipped = report.skipped, "corpus loaded");

    let config = if tutor { EngineConfig::language_tutor() } else { EngineConfig::default() };
    let engine = Arc::new(Engine::new(corpus, config)?);
    let session = ChatSession::new(Assistant::with_entropy(engine), SessionConfig::default());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", session.title());
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/new" => {
                session.start_new_chat();
                println!("{}", session.title());
            }
            "/stats" => println!("{}", serde_json::to_string_pretty(&session.stats())?),
            text => match session.submit(text).await {
                Ok(Some(reply)) => println!("{}\n", reply.text),
                Ok(None) => {}
                Err(SessionError::Busy) => tracing::warn!("still thinking"),
            },
        }
    }
    Ok(())
}

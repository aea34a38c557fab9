//! IntelliAssist core: knowledge entries, corpus, errors and configuration.

pub mod config;
pub mod corpus;
pub mod error;
pub mod types;

pub use config::AssistantConfig;
pub use corpus::{Corpus, LoadReport};
pub use error::{AssistError, Result};
pub use types::{EntryKind, EntryProjection, ExamplePair, GrammarRule, KnowledgeEntry};

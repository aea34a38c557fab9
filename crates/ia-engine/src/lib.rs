//! IntelliAssist matching engine.
//!
//! Stages per query:
//! 1. Normalize and classify (may short-circuit to an intent handler)
//! 2. Score every corpus entry by keyword and primary-text overlap
//! 3. Format the best entry, or fall back to a canned reply

pub mod assistant;
pub mod engine;
pub mod fallback;
pub mod formatter;
pub mod random;
pub mod scoring;

pub use assistant::Assistant;
pub use engine::{Engine, EngineConfig, Reply, ReplySource};
pub use fallback::FallbackPolicy;
pub use formatter::ResponseFormatter;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use scoring::{ScoredCandidate, Scorer};

use std::sync::Arc;

use crate::engine::{Engine, Reply};
use crate::random::{RandomSource, RngSource};

/// Caller-owned handle: a shared engine plus this session's random source.
pub struct Assistant {
    engine: Arc<Engine>,
    rng: Box<dyn RandomSource + Send>,
}

impl Assistant {
    pub fn new(engine: Arc<Engine>, rng: impl RandomSource + Send + 'static) -> Self {
        Self { engine, rng: Box::new(rng) }
    }

    /// Assistant drawing from OS entropy.
    pub fn with_entropy(engine: Arc<Engine>) -> Self {
        Self::new(engine, RngSource::from_entropy())
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    pub fn respond(&mut self, raw: &str) -> String {
        self.engine.respond(raw, self.rng.as_mut())
    }

    pub fn reply(&mut self, raw: &str) -> Reply {
        self.engine.reply(raw, self.rng.as_mut())
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("entries", &self.engine.corpus().len())
            .finish_non_exhaustive()
    }
}

//! Canned replies when nothing in the corpus matches.

use ia_core::config::MessageConfig;
use ia_router::Intent;

use crate::random::RandomSource;

#[derive(Debug, Clone, Default)]
pub struct FallbackPolicy {
    messages: MessageConfig,
}

impl FallbackPolicy {
    pub fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &MessageConfig {
        &self.messages
    }

    /// Greeting and Thanks get their fixed message; anything else draws one
    /// message from the pool.
    pub fn fallback(&self, intent: Option<Intent>, rng: &mut dyn RandomSource) -> String {
        match intent {
            Some(Intent::Greeting) => self.messages.greeting.clone(),
            Some(Intent::Thanks) => self.messages.thanks.clone(),
            _ => self.generic(rng),
        }
    }

    fn generic(&self, rng: &mut dyn RandomSource) -> String {
        let pool = &self.messages.fallback_pool;
        if pool.is_empty() {
            return self.messages.unavailable.clone();
        }
        pool[rng.pick(pool.len()) % pool.len()].clone()
    }
}

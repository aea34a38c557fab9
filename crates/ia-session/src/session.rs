//! Drives an [`Assistant`] the way a chat UI does: one submission at a time,
//! a simulated thinking delay, and an in-memory history.

use ia_engine::{Assistant, RandomSource, Reply, RngSource};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::conversation::{Conversation, Role, UsageStats};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("a previous message is still being processed")]
    Busy,
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Thinking delay is `min_delay_ms + uniform(0..jitter_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub min_delay_ms: u64,
    pub jitter_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { min_delay_ms: 800, jitter_ms: 1200 }
    }
}

impl SessionConfig {
    /// No artificial delay.
    pub fn instant() -> Self {
        Self { min_delay_ms: 0, jitter_ms: 0 }
    }
}

/// Clears the processing flag even if the submit future is dropped mid-delay.
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Caller-owned chat session. Share it behind an `Arc` to submit from several tasks.
pub struct ChatSession {
    assistant: Mutex<Assistant>,
    conversation: Mutex<Conversation>,
    delay_rng: Mutex<Box<dyn RandomSource + Send>>,
    config: SessionConfig,
    processing: AtomicBool,
}

impl ChatSession {
    pub fn new(assistant: Assistant, config: SessionConfig) -> Self {
        Self::with_delay_source(assistant, config, RngSource::from_entropy())
    }

    /// Session with an injected source for the thinking delay jitter.
    pub fn with_delay_source(
        assistant: Assistant,
        config: SessionConfig,
        delay_rng: impl RandomSource + Send + 'static,
    ) -> Self {
        Self {
            assistant: Mutex::new(assistant),
            conversation: Mutex::new(Conversation::new()),
            delay_rng: Mutex::new(Box::new(delay_rng)),
            config,
            processing: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn is_ready(&self) -> bool {
        lock(&self.assistant).is_ready()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    /// Submit user text. Blank input is ignored and yields `Ok(None)`, as does a
    /// reply whose chat was restarted during the thinking delay.
    pub async fn submit(&self, text: &str) -> Result<Option<Reply>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("submission rejected while busy");
            return Err(SessionError::Busy);
        }
        let _guard = ProcessingGuard(&self.processing);

        let conversation_id = {
            let mut conversation = lock(&self.conversation);
            conversation.push(Role::User, text);
            conversation.id.clone()
        };

        let delay = self.thinking_delay();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "thinking");
        tokio::time::sleep(delay).await;

        let reply = lock(&self.assistant).reply(text);
        let mut conversation = lock(&self.conversation);
        if conversation.id != conversation_id {
            tracing::debug!(conversation = %conversation_id, "chat restarted while thinking, reply dropped");
            return Ok(None);
        }
        conversation.push(Role::Assistant, reply.text.clone());
        tracing::debug!(source = ?reply.source, "replied");
        Ok(Some(reply))
    }

    fn thinking_delay(&self) -> Duration {
        let jitter = match usize::try_from(self.config.jitter_ms) {
            Ok(0) | Err(_) => 0,
            Ok(span) => lock(&self.delay_rng).pick(span) as u64,
        };
        Duration::from_millis(self.config.min_delay_ms.saturating_add(jitter))
    }

    pub fn title(&self) -> String {
        lock(&self.conversation).title().to_string()
    }

    pub fn stats(&self) -> UsageStats {
        lock(&self.conversation).stats()
    }

    /// Snapshot of the history.
    pub fn conversation(&self) -> Conversation {
        lock(&self.conversation).clone()
    }

    pub fn start_new_chat(&self) {
        lock(&self.conversation).start_new_chat();
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("config", &self.config)
            .field("processing", &self.is_processing())
            .finish_non_exhaustive()
    }
}

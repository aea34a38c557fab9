use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Title shown before the first user message.
pub const NEW_CHAT_TITLE: &str = "New chat";

const TITLE_WORDS: usize = 3;
const TITLE_MAX_CHARS: usize = 30;

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A conversation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4().simple()),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Serialize to a JSONL line.
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Counters over the current history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    /// First message timestamp, or now for an empty history.
    pub session_start: DateTime<Utc>,
}

/// In-memory chat history with a title taken from the first user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    title: String,
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: NEW_CHAT_TITLE.into(),
            messages: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message. The first user message also sets the title.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> &Message {
        let first_user = role == Role::User && !self.messages.iter().any(|m| m.role == Role::User);
        let msg = Message::new(role, content);
        if first_user {
            self.title = chat_title(&msg.content);
        }
        self.messages.push(msg);
        &self.messages[self.messages.len() - 1]
    }

    pub fn stats(&self) -> UsageStats {
        let user_messages = self.messages.iter().filter(|m| m.role == Role::User).count();
        UsageStats {
            total_messages: self.messages.len(),
            user_messages,
            assistant_messages: self.messages.len() - user_messages,
            session_start: self.messages.first().map(|m| m.created_at).unwrap_or_else(Utc::now),
        }
    }

    /// Drop the history and reset the title.
    pub fn start_new_chat(&mut self) {
        self.messages.clear();
        self.title = NEW_CHAT_TITLE.into();
        self.id = Uuid::new_v4().to_string();
        tracing::info!(conversation = %self.id, "new chat started");
    }

    /// Serialize all messages to JSONL.
    pub fn to_jsonl(&self) -> String {
        self.messages
            .iter()
            .map(Message::to_jsonl)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// First three space-separated words, cut to 30 chars plus `...` when longer.
pub fn chat_title(message: &str) -> String {
    let title = message
        .trim()
        .split(' ')
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    if title.chars().count() > TITLE_MAX_CHARS {
        let cut: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        title
    }
}

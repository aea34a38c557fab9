//! Chat session collaborator for the IntelliAssist engine.

pub mod conversation;
pub mod session;

pub use conversation::{chat_title, Conversation, Message, Role, UsageStats, NEW_CHAT_TITLE};
pub use session::{ChatSession, SessionConfig, SessionError};

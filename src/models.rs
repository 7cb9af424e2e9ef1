//! Typed request and response structures for the chat service wire contract.
//!
//! Every response arrives wrapped in a `{success, message, data}` envelope;
//! the harness validates shape at deserialization time and reports a
//! descriptive [`crate::ApiError`] on mismatch instead of probing dynamic
//! JSON for keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`. The optional ids are omitted from the wire
/// entirely when not supplied, which asks the service to create a new
/// session/chat server-side.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub chatbot_id: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

/// Response envelope common to all functional endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// `data` payload of `POST /api/chat/session`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionData {
    pub session_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `data` payload of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatData {
    pub session_id: String,
    pub chat_id: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub user_query: Option<String>,
    pub bot_response: String,
    #[serde(default)]
    pub context_used: Vec<String>,
}

/// `data` payload of `GET /api/chat/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryData {
    #[serde(default)]
    pub chat_id: Option<String>,
    pub count: usize,
    pub conversations: Vec<ConversationEntry>,
}

/// One prior exchange within a chat, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<i64>,
    pub user_query: String,
    pub bot_response: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

use std::env;

/// Base URL used when `CHAT_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Placeholder chatbot id the manual test script shipped with; operators are
/// expected to override it via `CHATBOT_ID`.
pub const DEFAULT_CHATBOT_ID: &str = "your_chatbot_id_here";

/// Harness configuration, passed into [`crate::ChatApiClient`] at
/// construction.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Base URL of the chat service, without a trailing slash.
    pub base_url: String,
    /// Chatbot the queries are addressed to.
    pub chatbot_id: String,
}

impl VerifyConfig {
    /// Load configuration from environment variables or use defaults.
    pub fn from_env() -> Self {
        Self::new(
            env::var("CHAT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            env::var("CHATBOT_ID").unwrap_or_else(|_| DEFAULT_CHATBOT_ID.to_string()),
        )
    }

    pub fn new(base_url: impl Into<String>, chatbot_id: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            chatbot_id: chatbot_id.into(),
        }
    }
}

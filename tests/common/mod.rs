//! Common test utilities: a wiremock stand-in for the chat service.
//!
//! The chat service is an external collaborator; tests encode its documented
//! HTTP contract here and drive the harness against it.

use chat_verify::{ChatApiClient, VerifyConfig};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CHATBOT_ID: &str = "chatbot-under-test";

pub struct MockChatService {
    pub server: MockServer,
}

impl MockChatService {
    pub async fn start() -> Self {
        chat_verify::init_tracing();
        Self {
            server: MockServer::start().await,
        }
    }

    /// Harness client pointed at this mock.
    pub fn client(&self) -> ChatApiClient {
        ChatApiClient::new(VerifyConfig::new(self.server.uri(), TEST_CHATBOT_ID))
    }

    pub async fn mount_health(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"status": "ok"})))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_chat_health(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/chat/health"))
            .respond_with(ResponseTemplate::new(status).set_body_json(
                json!({"status": "ok", "message": "Chat service is running"}),
            ))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_session(&self, session_id: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_envelope(session_id)))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_session_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat/session"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Chat responder for a query sent without session/chat ids. Matched on
    /// the query text, so scoped and unscoped requests with different queries
    /// can coexist.
    pub async fn mount_chat(
        &self,
        query: &str,
        session_id: &str,
        chat_id: &str,
        bot_response: &str,
    ) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({"query": query})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_envelope(session_id, chat_id, query, bot_response)),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Chat responder that additionally requires the given ids on the wire,
    /// verifying the harness threads them through unchanged.
    pub async fn mount_scoped_chat(
        &self,
        query: &str,
        session_id: &str,
        chat_id: &str,
        bot_response: &str,
    ) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({
                "query": query,
                "session_id": session_id,
                "chat_id": chat_id,
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_envelope(session_id, chat_id, query, bot_response)),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_chat_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_history(&self, chat_id: &str, exchanges: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(path("/api/chat/history"))
            .and(query_param("chat_id", chat_id))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(history_envelope(chat_id, exchanges)),
            )
            .mount(&self.server)
            .await;
    }
}

pub fn session_envelope(session_id: &str) -> Value {
    json!({
        "success": true,
        "message": "Session created successfully",
        "data": {
            "session_id": session_id,
            "created_at": "2024-01-01T00:00:00Z"
        }
    })
}

pub fn chat_envelope(session_id: &str, chat_id: &str, query: &str, bot_response: &str) -> Value {
    json!({
        "success": true,
        "message": "Chat request processed successfully",
        "data": {
            "session_id": session_id,
            "chat_id": chat_id,
            "conversation_id": Uuid::new_v4().to_string(),
            "user_query": query,
            "bot_response": bot_response,
            "context_used": ["docs/report.pdf"]
        }
    })
}

pub fn history_envelope(chat_id: &str, exchanges: &[(&str, &str)]) -> Value {
    let conversations: Vec<Value> = exchanges
        .iter()
        .enumerate()
        .map(|(i, (user_query, bot_response))| {
            json!({
                "id": Uuid::new_v4().to_string(),
                "sequence_number": i + 1,
                "user_query": user_query,
                "bot_response": bot_response,
                "created_at": format!("2024-01-01T00:0{}:00Z", i)
            })
        })
        .collect();

    json!({
        "success": true,
        "message": "Chat history retrieved successfully",
        "data": {
            "chat_id": chat_id,
            "conversations": conversations,
            "count": exchanges.len()
        }
    })
}

//! HTTP client for the chat service under verification.
//!
//! One method per test step. Each method returns a structured `Result`
//! rather than raising on HTTP failure, so the scenario can decide which
//! downstream steps a failure invalidates.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::VerifyConfig;
use crate::error::{ApiError, HealthError};
use crate::models::{ChatData, ChatRequest, Envelope, HistoryData, SessionData};

/// Top-level liveness endpoint.
pub const HEALTH_PATH: &str = "/health";
/// Chat sub-system liveness endpoint.
pub const CHAT_HEALTH_PATH: &str = "/api/chat/health";

pub struct ChatApiClient {
    client: Client,
    config: VerifyConfig,
}

impl ChatApiClient {
    pub fn new(config: VerifyConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Probe both liveness endpoints with unauthenticated GETs.
    ///
    /// The probes are issued and reported independently; one failing never
    /// prevents the other from running.
    pub async fn check_service_health(
        &self,
    ) -> (Result<(), HealthError>, Result<(), HealthError>) {
        (
            self.probe(HEALTH_PATH).await,
            self.probe(CHAT_HEALTH_PATH).await,
        )
    }

    async fn probe(&self, endpoint: &str) -> Result<(), HealthError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let response = self.client.get(&url).send().await.map_err(|e| {
            HealthError::Connection {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })?;

        if response.status().is_success() {
            tracing::debug!(endpoint, "Health check passed");
            Ok(())
        } else {
            Err(HealthError::Unhealthy {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            })
        }
    }

    /// `POST /api/chat/session` with an empty body.
    pub async fn create_session(&self) -> Result<SessionData, ApiError> {
        let url = format!("{}/api/chat/session", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let data: SessionData = decode_envelope(response).await?;
        tracing::info!(session_id = %data.session_id, "Session created");
        Ok(data)
    }

    /// `POST /api/chat`. Omitting `session_id`/`chat_id` asks the service to
    /// create a new session/chat server-side.
    pub async fn send_query(
        &self,
        query: &str,
        session_id: Option<&str>,
        chat_id: Option<&str>,
    ) -> Result<ChatData, ApiError> {
        let url = format!("{}/api/chat", self.config.base_url);
        let request = ChatRequest {
            chatbot_id: self.config.chatbot_id.clone(),
            query: query.to_string(),
            session_id: session_id.map(str::to_string),
            chat_id: chat_id.map(str::to_string),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let data: ChatData = decode_envelope(response).await?;
        tracing::info!(
            session_id = %data.session_id,
            chat_id = %data.chat_id,
            "Chat query answered"
        );
        Ok(data)
    }

    /// `GET /api/chat/history?chat_id=<id>`.
    pub async fn fetch_history(&self, chat_id: &str) -> Result<HistoryData, ApiError> {
        let url = format!("{}/api/chat/history", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", chat_id)])
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let data: HistoryData = decode_envelope(response).await?;
        tracing::info!(count = data.count, "Chat history retrieved");
        Ok(data)
    }
}

/// Extract the typed `data` payload from a service envelope.
///
/// A non-200 response keeps the literal status code and raw body; a 200
/// response whose body does not match the expected shape is reported as
/// [`ApiError::Malformed`] with the decode detail and the body attached.
async fn decode_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) => {
            if !envelope.success {
                // The envelope flag is informational; the status code and
                // typed data extraction carry the pass/fail signal.
                tracing::warn!(message = %envelope.message, "Service reported success=false");
            }
            Ok(envelope.data)
        }
        Err(e) => Err(ApiError::Malformed {
            detail: e.to_string(),
            body,
        }),
    }
}

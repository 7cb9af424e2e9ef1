//! Verification harness for the RAG chat HTTP API.
//!
//! Drives a fixed sequence of requests against a running chat service,
//! validates each response's status code and JSON envelope, threads the
//! identifiers returned by earlier calls (session id, chat id) into later
//! calls, and reports a pass/fail summary per step. The chat service itself
//! is an external collaborator consumed only through its HTTP contract.
//!
//! ## Usage
//!
//! ```bash
//! # Start the chat service, then:
//! CHAT_BASE_URL=http://localhost:8000 CHATBOT_ID=<uuid> cargo run
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod scenario;

pub use client::ChatApiClient;
pub use config::VerifyConfig;
pub use error::{ApiError, HealthError};
pub use scenario::{run_scenario, ScenarioReport, StepOutcome, StepStatus};

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chat_verify=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .ok();
    });
}

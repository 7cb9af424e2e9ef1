//! The end-to-end verification scenario.
//!
//! A linear fail-fast chain: health checks (never fatal), session creation,
//! an unscoped chat that exercises server-side session/chat auto-creation, a
//! scoped follow-up chat in the same conversation, and a history fetch that
//! must return both exchanges in order. A step's failure skips only the
//! steps that depend on its output.

use crate::client::ChatApiClient;
use crate::error::{ApiError, HealthError};
use crate::models::HistoryData;

/// Query used by the unscoped chat step.
pub const FIRST_QUERY: &str = "What is this document about?";
/// Query used by the scoped follow-up step.
pub const FOLLOW_UP_QUERY: &str = "Can you tell me more about the main topics?";

pub const STEP_SERVICE_HEALTH: &str = "service health";
pub const STEP_CHAT_HEALTH: &str = "chat health";
pub const STEP_CREATE_SESSION: &str = "create session";
pub const STEP_CHAT_WITHOUT_SESSION: &str = "chat without session";
pub const STEP_CHAT_WITH_SESSION: &str = "chat with session";
pub const STEP_CHAT_HISTORY: &str = "chat history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of a single scenario step, consumed for reporting.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: &'static str,
    pub status: StepStatus,
    /// HTTP status received, when the failure carried one.
    pub http_status: Option<u16>,
    pub detail: Option<String>,
}

impl StepOutcome {
    fn pass(step: &'static str) -> Self {
        Self {
            step,
            status: StepStatus::Passed,
            http_status: None,
            detail: None,
        }
    }

    fn fail(step: &'static str, http_status: Option<u16>, detail: String) -> Self {
        Self {
            step,
            status: StepStatus::Failed,
            http_status,
            detail: Some(detail),
        }
    }

    fn fail_api(step: &'static str, error: &ApiError) -> Self {
        Self::fail(step, error.http_status(), error.to_string())
    }

    fn fail_health(step: &'static str, error: &HealthError) -> Self {
        let status = match error {
            HealthError::Unhealthy { status, .. } => Some(*status),
            HealthError::Connection { .. } => None,
        };
        Self::fail(step, status, error.to_string())
    }

    fn skip(step: &'static str, reason: &str) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            http_status: None,
            detail: Some(reason.to_string()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == StepStatus::Passed
    }
}

/// All step outcomes of a scenario run, in execution order.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub outcomes: Vec<StepOutcome>,
}

impl ScenarioReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::passed)
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for outcome in &self.outcomes {
            match outcome.status {
                StepStatus::Passed => counts.0 += 1,
                StepStatus::Failed => counts.1 += 1,
                StepStatus::Skipped => counts.2 += 1,
            }
        }
        counts
    }

    pub fn outcome(&self, step: &str) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.step == step)
    }

    fn push(&mut self, outcome: StepOutcome) {
        match outcome.status {
            StepStatus::Passed => tracing::info!(step = outcome.step, "Step passed"),
            StepStatus::Failed => tracing::error!(
                step = outcome.step,
                status = outcome.http_status,
                detail = outcome.detail.as_deref().unwrap_or(""),
                "Step failed"
            ),
            StepStatus::Skipped => tracing::warn!(
                step = outcome.step,
                reason = outcome.detail.as_deref().unwrap_or(""),
                "Step skipped"
            ),
        }
        self.outcomes.push(outcome);
    }

    fn skip_all(&mut self, steps: &[&'static str], reason: &str) {
        for step in steps {
            self.push(StepOutcome::skip(step, reason));
        }
    }
}

/// Run the full verification scenario against `client`.
///
/// Steps execute sequentially; identifiers returned by earlier steps are
/// threaded unchanged into later ones. A chat id is only ever paired with
/// the session id that produced it.
pub async fn run_scenario(client: &ChatApiClient) -> ScenarioReport {
    let mut report = ScenarioReport::default();

    // 1. Liveness probes: independently reported, never abort the chain.
    let (service_health, chat_health) = client.check_service_health().await;
    report.push(match service_health {
        Ok(()) => StepOutcome::pass(STEP_SERVICE_HEALTH),
        Err(e) => StepOutcome::fail_health(STEP_SERVICE_HEALTH, &e),
    });
    report.push(match chat_health {
        Ok(()) => StepOutcome::pass(STEP_CHAT_HEALTH),
        Err(e) => StepOutcome::fail_health(STEP_CHAT_HEALTH, &e),
    });

    // 2. Session creation gates the rest of the chain.
    match client.create_session().await {
        Ok(_) => report.push(StepOutcome::pass(STEP_CREATE_SESSION)),
        Err(e) => {
            report.push(StepOutcome::fail_api(STEP_CREATE_SESSION, &e));
            report.skip_all(
                &[
                    STEP_CHAT_WITHOUT_SESSION,
                    STEP_CHAT_WITH_SESSION,
                    STEP_CHAT_HISTORY,
                ],
                "session creation failed",
            );
            return report;
        }
    }

    // 3. Unscoped chat: the service creates a fresh session and chat for it,
    // distinct from the session of step 2.
    let (session_id, chat_id) = match client.send_query(FIRST_QUERY, None, None).await {
        Ok(data) => {
            report.push(StepOutcome::pass(STEP_CHAT_WITHOUT_SESSION));
            (data.session_id, data.chat_id)
        }
        Err(e) => {
            report.push(StepOutcome::fail_api(STEP_CHAT_WITHOUT_SESSION, &e));
            report.skip_all(
                &[STEP_CHAT_WITH_SESSION, STEP_CHAT_HISTORY],
                "no session/chat ids to continue with",
            );
            return report;
        }
    };

    // 4. Scoped follow-up continues the conversation from step 3.
    match client
        .send_query(FOLLOW_UP_QUERY, Some(&session_id), Some(&chat_id))
        .await
    {
        Ok(_) => report.push(StepOutcome::pass(STEP_CHAT_WITH_SESSION)),
        Err(e) => {
            report.push(StepOutcome::fail_api(STEP_CHAT_WITH_SESSION, &e));
            report.skip_all(&[STEP_CHAT_HISTORY], "follow-up chat failed");
            return report;
        }
    }

    // 5. Both exchanges must now be retrievable, oldest first.
    match client.fetch_history(&chat_id).await {
        Ok(history) => report.push(validate_history(&history)),
        Err(e) => report.push(StepOutcome::fail_api(STEP_CHAT_HISTORY, &e)),
    }

    report
}

fn validate_history(history: &HistoryData) -> StepOutcome {
    if history.count < 2 {
        return StepOutcome::fail(
            STEP_CHAT_HISTORY,
            None,
            format!("expected at least 2 conversations, got {}", history.count),
        );
    }

    let first = history
        .conversations
        .iter()
        .position(|c| c.user_query == FIRST_QUERY);
    let second = history
        .conversations
        .iter()
        .position(|c| c.user_query == FOLLOW_UP_QUERY);

    match (first, second) {
        (Some(first), Some(second)) if first < second => StepOutcome::pass(STEP_CHAT_HISTORY),
        (Some(_), Some(_)) => StepOutcome::fail(
            STEP_CHAT_HISTORY,
            None,
            "conversations are not in chronological order".to_string(),
        ),
        _ => StepOutcome::fail(
            STEP_CHAT_HISTORY,
            None,
            "history is missing one of the submitted queries".to_string(),
        ),
    }
}

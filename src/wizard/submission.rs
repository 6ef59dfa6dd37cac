//! Registration submission: backend abstraction and the cancellable
//! background task that reports completion to the UI loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::form::RegistrationPayload;

/// Errors reported by a registration backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("registration rejected: {0}")]
    Rejected(String),

    #[error("registration service unavailable: {0}")]
    Unavailable(String),
}

/// Receipt returned once a registration is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl Ack {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination for completed registrations
#[async_trait]
pub trait RegistrationSubmitter: Send + Sync {
    async fn submit(&self, payload: RegistrationPayload) -> Result<Ack, SubmitError>;
}

/// Accepts every registration after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RegistrationSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: RegistrationPayload) -> Result<Ack, SubmitError> {
        tracing::debug!(
            services = payload.services.len(),
            fluids = payload.fluids.len(),
            staff = payload.staff.len(),
            "Simulating registration submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(Ack::new())
    }
}

/// Result of one submission, tagged with the ticket it was started under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub ticket: u64,
    pub result: Result<Ack, SubmitError>,
}

/// Handle to an in-flight submission. Dropping it cancels the task, so no
/// outcome is delivered for a session that was torn down.
#[derive(Debug)]
pub struct PendingSubmission {
    ticket: u64,
    handle: JoinHandle<()>,
}

impl PendingSubmission {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the task; its outcome is never delivered
    pub fn cancel(self) {
        tracing::info!(ticket = self.ticket, "Submission cancelled");
        drop(self);
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!(ticket = self.ticket, "Cancelling pending submission");
        }
        self.handle.abort();
    }
}

/// Spawns submissions on the tokio runtime and collects their outcomes
pub struct SubmissionRunner {
    submitter: Arc<dyn RegistrationSubmitter>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl SubmissionRunner {
    pub fn new(submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            submitter,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Start submitting `payload` under `ticket`. Must be called from
    /// within a tokio runtime.
    pub fn spawn(&self, ticket: u64, payload: RegistrationPayload) -> PendingSubmission {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.outcome_tx.clone();

        let handle = tokio::spawn(async move {
            let result = submitter.submit(payload).await;
            if tx.send(SubmissionOutcome { ticket, result }).is_err() {
                tracing::debug!(ticket, "Submission outcome receiver closed");
            }
        });

        tracing::info!(ticket, "Submission task started");
        PendingSubmission { ticket, handle }
    }

    /// Next delivered outcome, if any, without blocking
    pub fn try_next(&mut self) -> Option<SubmissionOutcome> {
        self.outcome_rx.try_recv().ok()
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("{0}")]
    Rejected(String),

    #[error("could not reach the messaging provider: {0}")]
    Transport(String),
}

/// Provider acknowledgement for a message queued for later delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessage {
    pub id: String,
    pub reference: String,
}

/// Hands a message to a provider that delivers it at `send_at`.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    async fn schedule(
        &self,
        originator: &str,
        destination: &str,
        body: &str,
        send_at: DateTime<Tz>,
    ) -> Result<ScheduledMessage, SchedulerError>;
}

pub mod in_memory;

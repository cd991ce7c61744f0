use crate::shared::infrastructure::notification_scheduler::{
    NotificationScheduler, ScheduledMessage, SchedulerError,
};
use chrono::DateTime;
use chrono_tz::Tz;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledNotification {
    pub originator: String,
    pub destination: String,
    pub body: String,
    pub send_at: DateTime<Tz>,
}

#[derive(Default)]
pub struct InMemoryNotificationScheduler {
    pub scheduled: Mutex<Vec<ScheduledNotification>>,
    offline: bool,
}

impl InMemoryNotificationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl NotificationScheduler for InMemoryNotificationScheduler {
    async fn schedule(
        &self,
        originator: &str,
        destination: &str,
        body: &str,
        send_at: DateTime<Tz>,
    ) -> Result<ScheduledMessage, SchedulerError> {
        if self.offline {
            return Err(SchedulerError::Rejected("Message scheduler offline".into()));
        }
        let mut scheduled = self.scheduled.lock().await;
        scheduled.push(ScheduledNotification {
            originator: originator.to_string(),
            destination: destination.to_string(),
            body: body.to_string(),
            send_at,
        });
        Ok(ScheduledMessage {
            id: format!("msg-{:04}", scheduled.len()),
            reference: format!("ref-{:04}", scheduled.len()),
        })
    }
}

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::infrastructure::messagebird::{MessageBirdClient, describe_failure};
use crate::shared::infrastructure::notification_scheduler::{
    NotificationScheduler, ScheduledMessage, SchedulerError,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessageBody<'a> {
    originator: &'a str,
    recipients: [&'a str; 1],
    body: &'a str,
    scheduled_datetime: String,
    reference: String,
}

#[derive(Deserialize)]
struct CreatedMessage {
    id: String,
}

#[async_trait]
impl NotificationScheduler for MessageBirdClient {
    async fn schedule(
        &self,
        originator: &str,
        destination: &str,
        body: &str,
        send_at: DateTime<Tz>,
    ) -> Result<ScheduledMessage, SchedulerError> {
        let reference = Uuid::now_v7().to_string();
        let request = CreateMessageBody {
            originator,
            recipients: [destination],
            body,
            scheduled_datetime: send_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            reference: reference.clone(),
        };

        let response = self
            .http
            .post(self.endpoint(&["messages"]))
            .header(AUTHORIZATION, self.authorization())
            .json(&request)
            .send()
            .await
            .map_err(|err| SchedulerError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let detail = describe_failure(response).await;
            tracing::error!(%reference, %detail, "MessageBird rejected scheduled message");
            return Err(SchedulerError::Rejected(detail));
        }

        let created = response
            .json::<CreatedMessage>()
            .await
            .map_err(|err| SchedulerError::Transport(err.to_string()))?;
        Ok(ScheduledMessage {
            id: created.id,
            reference,
        })
    }
}

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;

use crate::shared::infrastructure::messagebird::{MessageBirdClient, describe_failure};
use crate::shared::infrastructure::phone_lookup::{PhoneLookupError, PhoneValidator};

#[async_trait]
impl PhoneValidator for MessageBirdClient {
    async fn check(&self, number: &str, region_hint: &str) -> Result<bool, PhoneLookupError> {
        let response = self
            .http
            .get(self.endpoint(&["lookup", number]))
            .header(AUTHORIZATION, self.authorization())
            .query(&[("countryCode", region_hint)])
            .send()
            .await
            .map_err(|err| PhoneLookupError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        // MessageBird answers 400/404/422 for numbers it cannot parse or resolve.
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            tracing::debug!(%status, "phone lookup rejected number");
            return Ok(false);
        }
        Err(PhoneLookupError::Provider {
            status: status.as_u16(),
            detail: describe_failure(response).await,
        })
    }
}

// MessageBird REST client shared by the phone lookup and SMS scheduling adapters.
//
// One client is built at startup and shared read-only between requests.

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub mod lookup;
pub mod messages;

pub const DEFAULT_BASE_URL: &str = "https://rest.messagebird.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MessageBirdError {
    #[error("invalid MessageBird base url {url}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct MessageBirdClient {
    http: Client,
    base_url: Url,
    access_key: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrors {
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    description: String,
}

impl MessageBirdClient {
    pub fn new(
        access_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, MessageBirdError> {
        let parsed = Url::parse(base_url).map_err(|err| MessageBirdError::BaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(MessageBirdError::BaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: parsed,
            access_key: access_key.into(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorization(&self) -> String {
        format!("AccessKey {}", self.access_key)
    }
}

/// Joins the `errors[].description` values of a failed response, falling back
/// to the HTTP status when the body carries none.
async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let descriptions = match response.json::<ApiErrors>().await {
        Ok(body) => body
            .errors
            .into_iter()
            .map(|error| error.description)
            .filter(|description| !description.is_empty())
            .collect::<Vec<_>>(),
        Err(_) => Vec::new(),
    };
    if descriptions.is_empty() {
        format!("MessageBird responded with {status}")
    } else {
        descriptions.join("; ")
    }
}

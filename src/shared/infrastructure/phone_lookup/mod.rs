use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhoneLookupError {
    #[error("lookup rejected by provider ({status}): {detail}")]
    Provider { status: u16, detail: String },

    #[error("lookup request failed: {0}")]
    Transport(String),
}

/// Confirms that a phone number is reachable, using `region_hint` to read
/// numbers written without a country code.
#[async_trait]
pub trait PhoneValidator: Send + Sync {
    async fn check(&self, number: &str, region_hint: &str) -> Result<bool, PhoneLookupError>;
}

pub mod in_memory;

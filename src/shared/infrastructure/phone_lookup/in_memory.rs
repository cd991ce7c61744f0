use crate::shared::infrastructure::phone_lookup::{PhoneLookupError, PhoneValidator};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCheck {
    pub number: String,
    pub region_hint: String,
}

/// Phone validator that accepts a fixed set of numbers and records every check.
#[derive(Default)]
pub struct InMemoryPhoneValidator {
    valid_numbers: HashSet<String>,
    offline: bool,
    pub checks: Mutex<Vec<PhoneCheck>>,
}

impl InMemoryPhoneValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid_numbers: numbers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl PhoneValidator for InMemoryPhoneValidator {
    async fn check(&self, number: &str, region_hint: &str) -> Result<bool, PhoneLookupError> {
        self.checks.lock().await.push(PhoneCheck {
            number: number.to_string(),
            region_hint: region_hint.to_string(),
        });
        if self.offline {
            return Err(PhoneLookupError::Transport("Phone lookup offline".into()));
        }
        Ok(self.valid_numbers.contains(number))
    }
}

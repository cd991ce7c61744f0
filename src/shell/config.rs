use anyhow::{Context, Result};
use chrono::TimeDelta;
use chrono_tz::Tz;
use std::env;
use std::net::IpAddr;

use crate::modules::appointments::core::business_hours::BusinessHours;
use crate::shared::infrastructure::messagebird::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub messagebird: MessageBirdConfig,
    pub salon: SalonConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Clone)]
pub struct MessageBirdConfig {
    pub access_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for MessageBirdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBirdConfig")
            .field("access_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Booking rules of the salon. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalonConfig {
    pub zone: Tz,
    pub business_hours: BusinessHours,
    pub lead_time: TimeDelta,
    pub region_hint: String,
    pub originator: String,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            zone: chrono_tz::Europe::Amsterdam,
            business_hours: BusinessHours::default(),
            lead_time: TimeDelta::hours(3),
            region_hint: "NL".to_string(),
            originator: "BeautyBird".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which resolves a variable name to
    /// its value when set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("SERVER_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let access_key =
            lookup("MESSAGEBIRD_ACCESS_KEY").context("MESSAGEBIRD_ACCESS_KEY must be set")?;
        let base_url =
            lookup("MESSAGEBIRD_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            messagebird: MessageBirdConfig {
                access_key,
                base_url,
            },
            salon: SalonConfig::default(),
        })
    }
}

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

/// Result of checking a requested appointment time against the salon rules.
///
/// Rejections carry what a reader needs to pick a better slot: the day's
/// opening bounds, or the required lead time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    BeforeNow,
    BeforeOpening {
        opens_at: DateTime<Tz>,
        closes_at: DateTime<Tz>,
    },
    AfterClosing {
        opens_at: DateTime<Tz>,
        closes_at: DateTime<Tz>,
    },
    TooSoon {
        lead_time: TimeDelta,
    },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

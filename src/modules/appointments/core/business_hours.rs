use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::modules::appointments::core::local_time::resolve_local;

/// Daily window in which appointments may start. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
}

impl BusinessHours {
    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            opens_at,
            closes_at,
        }
    }

    pub fn opening_on(&self, zone: Tz, date: NaiveDate) -> DateTime<Tz> {
        resolve_local(zone, date, self.opens_at)
    }

    pub fn closing_on(&self, zone: Tz, date: NaiveDate) -> DateTime<Tz> {
        resolve_local(zone, date, self.closes_at)
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::new(
            NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time of day"),
            NaiveTime::from_hms_opt(18, 0, 0).expect("18:00 is a valid time of day"),
        )
    }
}

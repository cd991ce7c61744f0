use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::modules::appointments::core::local_time::resolve_local;

pub mod commands {
    pub mod book_appointment;
}

/// Wall-clock minute in Europe/Amsterdam.
pub fn amsterdam(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    resolve_local(
        chrono_tz::Europe::Amsterdam,
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
    )
}

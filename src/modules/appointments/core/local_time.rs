use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Resolves a wall-clock date and time in `zone` to a single instant.
///
/// Overlapping local times (clocks turned back) resolve to the earlier instant.
/// Local times inside a gap (clocks turned forward) are read with the offset in
/// effect a day earlier, which moves them past the transition.
pub fn resolve_local(zone: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.and_time(time);
    if let Some(instant) = zone.from_local_datetime(&naive).earliest() {
        return instant;
    }
    let before_gap = zone
        .offset_from_utc_datetime(&(naive - TimeDelta::days(1)))
        .fix();
    let utc = naive - TimeDelta::seconds(i64::from(before_gap.local_minus_utc()));
    zone.from_utc_datetime(&utc)
}

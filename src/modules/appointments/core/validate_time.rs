use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use crate::modules::appointments::core::business_hours::BusinessHours;
use crate::modules::appointments::core::validation_outcome::ValidationOutcome;

/// Decides whether `appointment` can be booked at `now`.
///
/// Checks run in a fixed order and the first failing one wins: in the past,
/// before opening, after closing, then inside the lead time. Opening and
/// closing are taken on the appointment's own calendar day in its zone.
pub fn validate_appointment_time(
    appointment: DateTime<Tz>,
    now: DateTime<Tz>,
    lead_time: TimeDelta,
    business_hours: &BusinessHours,
) -> ValidationOutcome {
    let zone = appointment.timezone();
    let day = appointment.date_naive();
    let opens_at = business_hours.opening_on(zone, day);
    let closes_at = business_hours.closing_on(zone, day);

    if appointment < now {
        ValidationOutcome::BeforeNow
    } else if appointment < opens_at {
        ValidationOutcome::BeforeOpening {
            opens_at,
            closes_at,
        }
    } else if appointment > closes_at {
        ValidationOutcome::AfterClosing {
            opens_at,
            closes_at,
        }
    } else if appointment - now < lead_time {
        ValidationOutcome::TooSoon { lead_time }
    } else {
        ValidationOutcome::Valid
    }
}

// Customer-facing wording for booking results and the reminder SMS.

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use crate::modules::appointments::core::validation_outcome::ValidationOutcome;
use crate::modules::appointments::use_cases::book_appointment::decision::{
    BookingConfirmation, BookingError,
};

const INSTANT_FORMAT: &str = "%a, %d %b %Y %-I:%M %p";
const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";
const RETRY_PROMPT: &str = "Please check your details and try again!";

pub fn format_instant(instant: &DateTime<Tz>) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

pub fn reminder_body(salon_name: &str, appointment_at: &DateTime<Tz>) -> String {
    format!(
        "Gentle reminder: you've got an appointment with {salon_name} at {}. See you then!",
        format_instant(appointment_at)
    )
}

pub fn confirmation_status(salon_name: &str, confirmation: &BookingConfirmation) -> String {
    format!(
        "Done! We've set up an appointment for you at {} for {}. We'll send a reminder to {} at {}. Thanks for using {salon_name}!",
        format_instant(&confirmation.appointment_at),
        confirmation.treatment,
        confirmation.phone,
        format_instant(&confirmation.reminder_at),
    )
}

pub fn error_status(error: &BookingError) -> String {
    match error {
        BookingError::InputMalformed => RETRY_PROMPT.to_string(),
        BookingError::PhoneInvalid => "Please enter a valid phone number.".to_string(),
        BookingError::TimeRejected(outcome) => outcome_status(outcome),
        BookingError::SchedulingFailed(detail) => format!("{detail}. {RETRY_PROMPT}"),
    }
}

pub fn outcome_status(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => String::new(),
        ValidationOutcome::BeforeNow => {
            "Cannot make a booking before now. Please try again!".to_string()
        }
        ValidationOutcome::BeforeOpening {
            opens_at,
            closes_at,
        } => format!(
            "We're not open yet! Please book your appointment between {} and {}.",
            opens_at.format(TIME_OF_DAY_FORMAT),
            closes_at.format(TIME_OF_DAY_FORMAT),
        ),
        ValidationOutcome::AfterClosing {
            opens_at,
            closes_at,
        } => format!(
            "We're closed! Please book your appointment between {} and {}.",
            opens_at.format(TIME_OF_DAY_FORMAT),
            closes_at.format(TIME_OF_DAY_FORMAT),
        ),
        ValidationOutcome::TooSoon { lead_time } => format!(
            "Please book an appointment {} in advance.",
            lead_time_phrase(*lead_time)
        ),
    }
}

/// Largest whole unit that states `lead_time` exactly.
fn lead_time_phrase(lead_time: TimeDelta) -> String {
    let seconds = lead_time.num_seconds();
    if seconds % 60 != 0 {
        return counted(seconds, "second");
    }
    let minutes = seconds / 60;
    if minutes != 0 && minutes % 60 == 0 {
        counted(minutes / 60, "hour")
    } else {
        counted(minutes, "minute")
    }
}

fn counted(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

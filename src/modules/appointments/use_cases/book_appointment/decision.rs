use chrono::DateTime;
use chrono_tz::Tz;

use crate::modules::appointments::core::validation_outcome::ValidationOutcome;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("appointment date or time could not be parsed")]
    InputMalformed,

    #[error("phone number could not be confirmed")]
    PhoneInvalid,

    #[error("appointment time rejected: {0:?}")]
    TimeRejected(ValidationOutcome),

    #[error("scheduling the reminder failed: {0}")]
    SchedulingFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub name: String,
    pub treatment: String,
    pub phone: String,
    pub appointment_at: DateTime<Tz>,
    pub reminder_at: DateTime<Tz>,
    pub message_id: String,
}

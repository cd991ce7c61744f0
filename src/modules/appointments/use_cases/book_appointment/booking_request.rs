use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::modules::appointments::core::local_time::resolve_local;
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::modules::appointments::use_cases::book_appointment::decision::BookingError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub treatment: String,
    pub phone: String,
    pub appointment_at: DateTime<Tz>,
    pub min_selectable_date: NaiveDate,
}

impl BookingRequest {
    /// Combines the separately submitted date and time into one instant in
    /// `zone`. Blank or unparsable input is rejected rather than defaulted.
    pub fn assemble(
        command: &BookAppointment,
        zone: Tz,
        today: NaiveDate,
    ) -> Result<Self, BookingError> {
        let name = required(&command.name)?;
        let treatment = required(&command.treatment)?;
        let phone = required(&command.phone)?;
        let date = NaiveDate::parse_from_str(command.date.trim(), DATE_FORMAT)
            .map_err(|_| BookingError::InputMalformed)?;
        let time = parse_time(command.time.trim()).ok_or(BookingError::InputMalformed)?;

        Ok(Self {
            name,
            treatment,
            phone,
            appointment_at: resolve_local(zone, date, time),
            min_selectable_date: today,
        })
    }
}

fn required(raw: &str) -> Result<String, BookingError> {
    match raw.trim() {
        "" => Err(BookingError::InputMalformed),
        value => Ok(value.to_string()),
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

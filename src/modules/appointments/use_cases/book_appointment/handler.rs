use crate::modules::appointments::core::validate_time::validate_appointment_time;
use crate::modules::appointments::use_cases::book_appointment::booking_request::BookingRequest;
use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::modules::appointments::use_cases::book_appointment::decision::{
    BookingConfirmation, BookingError,
};
use crate::modules::appointments::use_cases::book_appointment::messages::reminder_body;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::notification_scheduler::NotificationScheduler;
use crate::shared::infrastructure::phone_lookup::PhoneValidator;
use crate::shell::config::SalonConfig;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use std::sync::Arc;

pub struct BookAppointmentHandler {
    salon: SalonConfig,
    phone_validator: Arc<dyn PhoneValidator>,
    scheduler: Arc<dyn NotificationScheduler>,
    clock: Arc<dyn Clock>,
}

impl BookAppointmentHandler {
    pub fn new(
        salon: SalonConfig,
        phone_validator: Arc<dyn PhoneValidator>,
        scheduler: Arc<dyn NotificationScheduler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            salon,
            phone_validator,
            scheduler,
            clock,
        }
    }

    pub fn salon(&self) -> &SalonConfig {
        &self.salon
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.salon.zone)
    }

    /// Earliest date the form offers: today in the salon's zone.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub async fn handle(
        &self,
        command: BookAppointment,
    ) -> Result<BookingConfirmation, BookingError> {
        self.handle_at(command, self.now()).await
    }

    /// Books against a `now` the caller already read, so the page it renders
    /// and the validation agree on the current day.
    pub async fn handle_at(
        &self,
        command: BookAppointment,
        now: DateTime<Tz>,
    ) -> Result<BookingConfirmation, BookingError> {
        let request = BookingRequest::assemble(&command, self.salon.zone, now.date_naive())?;

        match self
            .phone_validator
            .check(&request.phone, &self.salon.region_hint)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(phone = %request.phone, "phone number rejected by lookup");
                return Err(BookingError::PhoneInvalid);
            }
            Err(err) => {
                tracing::warn!(phone = %request.phone, error = %err, "phone lookup failed");
                return Err(BookingError::PhoneInvalid);
            }
        }

        let outcome = validate_appointment_time(
            request.appointment_at,
            now,
            self.salon.lead_time,
            &self.salon.business_hours,
        );
        if !outcome.is_valid() {
            tracing::warn!(appointment_at = %request.appointment_at, ?outcome, "appointment time rejected");
            return Err(BookingError::TimeRejected(outcome));
        }

        let reminder_at = request.appointment_at - self.salon.lead_time;
        let body = reminder_body(&self.salon.originator, &request.appointment_at);
        let scheduled = self
            .scheduler
            .schedule(&self.salon.originator, &request.phone, &body, reminder_at)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "scheduling reminder failed");
                BookingError::SchedulingFailed(err.to_string())
            })?;

        tracing::info!(
            message_id = %scheduled.id,
            reference = %scheduled.reference,
            appointment_at = %request.appointment_at,
            reminder_at = %reminder_at,
            "appointment booked"
        );

        Ok(BookingConfirmation {
            name: request.name,
            treatment: request.treatment,
            phone: request.phone,
            appointment_at: request.appointment_at,
            reminder_at,
            message_id: scheduled.id,
        })
    }
}

use crate::modules::appointments::use_cases::book_appointment::handler::BookAppointmentHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub book_handler: Arc<BookAppointmentHandler>,
}

use askama::Template;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::appointments::use_cases::book_appointment::command::BookAppointment;
use crate::modules::appointments::use_cases::book_appointment::decision::BookingError;
use crate::modules::appointments::use_cases::book_appointment::messages::{
    confirmation_status, error_status,
};
use crate::shell::state::AppState;

/// Every field is required. A body missing one is rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct BookAppointmentBody {
    pub name: String,
    pub treatment: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl From<BookAppointmentBody> for BookAppointment {
    fn from(body: BookAppointmentBody) -> Self {
        Self {
            name: body.name,
            treatment: body.treatment,
            phone: body.phone,
            date: body.date,
            time: body.time,
        }
    }
}

#[derive(Template, Debug, Default)]
#[template(path = "booking.html")]
pub struct BookingPage {
    pub salon_name: String,
    pub name: String,
    pub treatment: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub min_date: String,
    pub message: Option<String>,
    pub booked: bool,
}

impl BookingPage {
    fn prefilled(salon_name: &str, command: &BookAppointment, min_date: String) -> Self {
        Self {
            salon_name: salon_name.to_string(),
            name: command.name.clone(),
            treatment: command.treatment.clone(),
            phone: command.phone.clone(),
            date: command.date.clone(),
            time: command.time.clone(),
            min_date,
            message: None,
            booked: false,
        }
    }
}

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let handler = &state.book_handler;
    HtmlTemplate(BookingPage {
        salon_name: handler.salon().originator.clone(),
        min_date: handler.today().to_string(),
        ..BookingPage::default()
    })
}

pub async fn submit(
    State(state): State<AppState>,
    body: Result<Form<BookAppointmentBody>, FormRejection>,
) -> impl IntoResponse {
    let handler = &state.book_handler;
    let salon_name = handler.salon().originator.clone();
    let now = handler.now();
    let min_date = now.date_naive().to_string();

    let command: BookAppointment = match body {
        Ok(Form(body)) => body.into(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "booking form could not be decoded");
            let mut page =
                BookingPage::prefilled(&salon_name, &BookAppointment::default(), min_date);
            page.message = Some(error_status(&BookingError::InputMalformed));
            return HtmlTemplate(page);
        }
    };

    let mut page = BookingPage::prefilled(&salon_name, &command, min_date);
    match handler.handle_at(command, now).await {
        Ok(confirmation) => {
            page.message = Some(confirmation_status(&salon_name, &confirmation));
            page.booked = true;
        }
        Err(err) => {
            page.message = Some(error_status(&err));
        }
    }
    HtmlTemplate(page)
}

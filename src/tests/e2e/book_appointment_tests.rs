// End-to-end tests for the booking page through the full router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::appointments::use_cases::book_appointment::handler::BookAppointmentHandler;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::notification_scheduler::in_memory::InMemoryNotificationScheduler;
use crate::shared::infrastructure::phone_lookup::in_memory::InMemoryPhoneValidator;
use crate::shell::config::SalonConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::amsterdam;
use crate::tests::fixtures::commands::book_appointment::BookAppointmentBuilder;

const VALID_PHONE: &str = "+31612345678";

struct World {
    app: Router,
    validator: Arc<InMemoryPhoneValidator>,
    scheduler: Arc<InMemoryNotificationScheduler>,
}

#[fixture]
fn world() -> World {
    let validator = Arc::new(InMemoryPhoneValidator::accepting([VALID_PHONE]));
    let scheduler = Arc::new(InMemoryNotificationScheduler::new());
    let clock = Arc::new(FixedClock::new(
        amsterdam(2024, 3, 1, 10, 0).with_timezone(&Utc),
    ));
    let book_handler = Arc::new(BookAppointmentHandler::new(
        SalonConfig::default(),
        validator.clone(),
        scheduler.clone(),
        clock,
    ));
    World {
        app: router(AppState { book_handler }),
        validator,
        scheduler,
    }
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn submit(app: Router, form: String) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::post("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_text(response).await)
}

#[rstest]
#[tokio::test]
async fn it_should_render_an_empty_form_on_first_visit(world: World) {
    let response = world
        .app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains(r#"min="2024-03-01""#));
    assert!(html.contains(r#"name="phone" value="""#));
    assert!(world.validator.checks.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_preserve_the_input_and_never_schedule_when_the_phone_is_invalid(
    world: World,
) {
    let form = BookAppointmentBuilder::new()
        .name("Mia Jansen")
        .treatment("Pedicure")
        .phone("+31600000000")
        .form_body();

    let (status, html) = submit(world.app, form).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please enter a valid phone number."));
    assert!(html.contains(r#"value="Mia Jansen""#));
    assert!(html.contains(r#"value="Pedicure""#));
    assert!(html.contains(r#"value="+31600000000""#));
    assert!(world.scheduler.scheduled.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_book_and_schedule_exactly_one_reminder(world: World) {
    let (status, html) = submit(world.app, BookAppointmentBuilder::new().form_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("set up an appointment for you at Fri, 01 Mar 2024 2:00 PM"));
    assert!(html.contains("send a reminder to +31612345678 at Fri, 01 Mar 2024 11:00 AM"));
    let scheduled = world.scheduler.scheduled.lock().await;
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].destination, VALID_PHONE);
    assert_eq!(scheduled[0].originator, "BeautyBird");
    assert_eq!(scheduled[0].send_at, amsterdam(2024, 3, 1, 11, 0));
}

#[rstest]
#[case::before_now("2024-02-29", "09:00", "Cannot make a booking before now. Please try again!")]
#[case::before_opening(
    "2024-03-02",
    "08:00",
    "not open yet! Please book your appointment between 09:00 AM and 06:00 PM."
)]
#[case::after_closing(
    "2024-03-01",
    "19:00",
    "closed! Please book your appointment between 09:00 AM and 06:00 PM."
)]
#[case::too_soon("2024-03-01", "11:00", "Please book an appointment 3 hours in advance.")]
#[tokio::test]
async fn it_should_explain_why_a_time_is_rejected(
    world: World,
    #[case] date: &str,
    #[case] time: &str,
    #[case] expected: &str,
) {
    let form = BookAppointmentBuilder::new().date(date).time(time).form_body();

    let (status, html) = submit(world.app, form).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(expected), "missing {expected:?} in {html}");
    assert!(world.scheduler.scheduled.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_not_call_any_provider_for_malformed_input(world: World) {
    let form = BookAppointmentBuilder::new().time("half past two").form_body();

    let (status, html) = submit(world.app, form).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please check your details and try again!"));
    assert!(world.validator.checks.lock().await.is_empty());
    assert!(world.scheduler.scheduled.lock().await.is_empty());
}

#[rstest]
#[case::without_name_or_treatment("phone=%2B31612345678&date=2024-03-01&time=14%3A00")]
#[case::without_name("treatment=Manicure&phone=%2B31612345678&date=2024-03-01&time=14%3A00")]
#[case::blank_name("name=+&treatment=Manicure&phone=%2B31612345678&date=2024-03-01&time=14%3A00")]
#[tokio::test]
async fn it_should_refuse_to_book_when_a_required_field_is_missing(
    world: World,
    #[case] form: &str,
) {
    let (status, html) = submit(world.app, form.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please check your details and try again!"));
    assert!(!html.contains("set up an appointment"));
    assert!(world.validator.checks.lock().await.is_empty());
    assert!(world.scheduler.scheduled.lock().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_answer_the_health_check(world: World) {
    let response = world
        .app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

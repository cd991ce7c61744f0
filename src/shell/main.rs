use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use beautybird::modules::appointments::use_cases::book_appointment::handler::BookAppointmentHandler;
use beautybird::shared::core::clock::SystemClock;
use beautybird::shared::infrastructure::messagebird::MessageBirdClient;
use beautybird::shell::config::AppConfig;
use beautybird::shell::http::router;
use beautybird::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let messagebird = Arc::new(
        MessageBirdClient::new(
            config.messagebird.access_key.clone(),
            &config.messagebird.base_url,
        )
        .context("Failed to build the MessageBird client")?,
    );

    let book_handler = Arc::new(BookAppointmentHandler::new(
        config.salon.clone(),
        messagebird.clone(),
        messagebird,
        Arc::new(SystemClock),
    ));

    let app = router(AppState { book_handler });

    let addr = SocketAddr::new(config.server.host, config.server.port);
    tracing::info!("Serving {} bookings on http://{}", config.salon.originator, addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

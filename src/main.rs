use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use booking_notify::config::AppConfig;
use booking_notify::services::email::resend::ResendProvider;
use booking_notify::services::template::TemplateRenderer;
use booking_notify::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(!config.resend_api_key.is_empty(), "RESEND_API_KEY must be set");
    tracing::info!(
        "using Resend provider (url: {}, timeout: {:?})",
        config.resend_api_url,
        config.provider_timeout
    );

    let email = ResendProvider::new(
        config.resend_api_key.clone(),
        config.resend_api_url.clone(),
        config.provider_timeout,
    )?;
    let templates = TemplateRenderer::new()?;

    let state = Arc::new(AppState {
        config: config.clone(),
        email: Box::new(email),
        templates,
    });

    let app = booking_notify::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

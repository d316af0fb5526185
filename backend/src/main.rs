use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers {
    pub mod lead_handlers;
}
mod relay {
    pub mod telegram;
}

use config::AppConfig;
use handlers::lead_handlers;
use relay::telegram::TelegramRelay;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    relay: TelegramRelay,
}

fn app(state: Arc<AppState>, frontend_dist: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/send-telegram", post(lead_handlers::send_telegram))
        .with_state(state);

    // The built landing page is served for every non-api path.
    let app = match frontend_dist {
        Some(dist) => api.fallback_service(
            ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))),
        ),
        None => api,
    };

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(
        CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_origin(Any)
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    config.validate();

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let state = Arc::new(AppState {
        relay: TelegramRelay::new(config.telegram.clone()),
    });
    tracing::info!("Telegram relay configured: {}", state.relay.config().is_complete());

    let app = app(state, config.frontend_dist.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub mod config;
pub mod cors;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", any(handlers::notify::send_booking_notification))
        .route(
            "/send-booking-notification",
            any(handlers::notify::send_booking_notification),
        )
        .fallback(handlers::not_found)
        .layer(middleware::map_response(cors::add_cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

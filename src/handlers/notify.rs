use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::BookingNotificationRequest;
use crate::state::AppState;

// ANY /send-booking-notification
pub async fn send_booking_notification(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, "ok").into_response();
    }

    match relay(&state, &body).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            // Provider failures are already logged with their detail in `relay`.
            if !matches!(e, AppError::Provider(_)) {
                tracing::error!(error = %e, "error in send-booking-notification");
            }
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, body: &[u8]) -> Result<serde_json::Value, AppError> {
    let notification = BookingNotificationRequest::from_json(body)?.validate()?;

    tracing::info!(to = %notification.admin_email, "sending booking notification");

    let email = state
        .templates
        .render(&notification, &state.config.email_from)?;

    let data = state.email.send_email(&email).await.map_err(|e| {
        let detail = format!("{e:#}");
        tracing::error!(error = %detail, "email provider rejected send");
        AppError::Provider(detail)
    })?;

    tracing::info!(response = %data, "email sent successfully");
    Ok(data)
}

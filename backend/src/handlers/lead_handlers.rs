use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::RelayError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub message: String,
}

pub async fn send_telegram(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Json(req) = payload.map_err(|e| {
        tracing::error!("Error sending to Telegram: invalid request body: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to send message"})),
        )
    })?;

    state.relay.send(&req.message).await.map_err(|e| {
        match &e {
            RelayError::MissingConfig(_) => tracing::warn!("{}", e),
            _ => {
                tracing::error!("Error sending to Telegram: {}", e);
                sentry::capture_error(&e);
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.public_message()})),
        )
    })?;

    tracing::info!("Lead forwarded to Telegram ({} chars)", req.message.chars().count());
    Ok(Json(json!({"success": true})))
}

// src/api/handlers.rs

use crate::api::{page, types::*, ApiState};
use crate::core::{InputEvent, Summary};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// GET / — The tabbed dashboard page, pre-filled with the initial view state.
pub async fn index(State(state): State<ApiState>) -> Result<Html<String>, ApiError> {
    page::render(&state.title, &state.ctx, &state.initial)
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render dashboard page: {e}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page")
        })
}

/// GET /api/v1/options — Values for the country and year dropdowns.
pub async fn options(State(state): State<ApiState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        winners: state.ctx.winners().to_vec(),
        years: state.ctx.years().to_vec(),
        default_winner: state.ctx.default_winner().map(str::to_string),
        default_year: state.ctx.default_year(),
    })
}

/// POST /api/v1/events — Fire one input event and get its channel's output.
pub async fn fire_event(
    State(state): State<ApiState>,
    body: Result<Json<InputEvent>, JsonRejection>,
) -> Result<Json<ChannelResponse>, ApiError> {
    let Json(event) = body.map_err(|rejection| {
        error(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid event: {}", rejection.body_text()),
        )
    })?;

    let (channel, output) = state.binder.dispatch(&state.ctx, &event).map_err(|e| {
        tracing::warn!("Event {:?} failed: {e}", event);
        error(StatusCode::BAD_REQUEST, e.to_string())
    })?;

    Ok(Json(ChannelResponse { channel, output }))
}

/// GET /api/v1/summary — Record count, ranked tally and unique lists.
pub async fn summary(State(state): State<ApiState>) -> Json<Summary> {
    Json(state.ctx.summary())
}

/// GET /api/v1/health — Simple health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

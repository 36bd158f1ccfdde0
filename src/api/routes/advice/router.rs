//! Router for the advice API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use super::public;
use crate::api::state::SharedState;

/// Answer a single question without touching any chat session
async fn advice_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::AdviceRequest>,
) -> Response {
    if payload.message.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Message is empty").into_response();
    }

    let advisor = Arc::clone(&state.read().expect("Unable to read share state").advisor);
    let advice = advisor.advise(&payload.message).await;

    Json(public::AdviceResponse {
        reply: advice.text,
        source: advice.source,
    })
    .into_response()
}

/// Create the advice router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(advice_handler))
}

//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::chat::{Transcript, TurnError};

/// Start a new chat session seeded with the greeting
async fn create_session(State(state): State<SharedState>) -> impl IntoResponse {
    let session = state
        .write()
        .expect("Unable to write share state")
        .sessions
        .create();
    tracing::debug!("Created chat session {}", session.id());

    (
        StatusCode::CREATED,
        Json(public::ChatSessionResponse {
            session_id: session.id().to_string(),
            in_flight: session.is_in_flight(),
            transcript: session.transcript().messages(),
        }),
    )
}

/// Get a single chat session by ID
async fn chat_session(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let shared_state = state.read().expect("Unable to read share state");
    match shared_state.sessions.get(&id) {
        Some(session) => Json(public::ChatSessionResponse {
            session_id: session.id().to_string(),
            in_flight: session.is_in_flight(),
            transcript: session.transcript().messages(),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response(),
    }
}

/// Add a message to a session and wait for the trainer's reply
async fn chat_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Response, ApiError> {
    let (turn, advisor) = {
        let mut shared_state = state.write().expect("Unable to write share state");
        let advisor = Arc::clone(&shared_state.advisor);
        let Some(session) = shared_state.sessions.get_mut(&id) else {
            return Ok((
                StatusCode::NOT_FOUND,
                format!("Chat session {} not found", id),
            )
                .into_response());
        };

        session.set_input(&payload.message);
        match session.begin_turn() {
            Ok(turn) => (turn, advisor),
            Err(e) => {
                // The buffer only ever holds this request's message
                session.set_input("");
                let status = match e {
                    TurnError::EmptyMessage => StatusCode::BAD_REQUEST,
                    TurnError::InFlight => StatusCode::CONFLICT,
                };
                return Ok((status, e.to_string()).into_response());
            }
        }
    };

    // Run the turn in its own task so the reply still lands in the
    // transcript if the client goes away mid-request.
    let task_state = Arc::clone(&state);
    let session_id = id.clone();
    let handle = tokio::spawn(async move {
        let advice = advisor.advise(&turn.message).await;
        let mut shared_state = task_state.write().expect("Unable to write share state");
        let transcript = match shared_state.sessions.get_mut(&session_id) {
            Some(session) => {
                session.complete_turn(turn, &advice.text);
                session.transcript().clone()
            }
            None => Transcript::new(),
        };
        (advice, transcript)
    });
    let (advice, transcript) = handle.await?;

    Ok(Json(public::ChatMessageResponse {
        reply: advice.text,
        source: advice.source,
        transcript: transcript.messages(),
    })
    .into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(chat_session))
        .route("/sessions/{id}/messages", post(chat_handler))
}

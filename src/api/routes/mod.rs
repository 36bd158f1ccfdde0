//! API routes module

pub mod advice;
pub mod chat;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat widget sessions
        .nest("/chat", chat::router())
        // One-off questions without a session
        .nest("/advice", advice::router())
}

//! Handlers for the landing page itself
use std::sync::Arc;

use axum::{extract::State, response::Html};
use chrono::{Datelike, Local};

use crate::api::public::ApiError;
use crate::api::state::SharedState;

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let (pages, base_path) = {
        let shared_state = state.read().expect("Unable to read share state");
        (
            Arc::clone(&shared_state.pages),
            shared_state.config.base_path.clone(),
        )
    };
    let html = pages.render(&base_path, Local::now().year())?;
    Ok(Html(html))
}

pub async fn health() -> &'static str {
    "ok"
}

//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use surefit::ai::{FallbackTable, FitnessAdvisor};
use surefit::api::{AppState, SharedState};
use surefit::api::app;
use surefit::core::AppConfig;

/// Config with no credential, mounted at `/`, serving the repo's
/// static assets.
pub fn test_config() -> AppConfig {
    AppConfig {
        gemini_api_key: None,
        gemini_api_hostname: String::from("http://127.0.0.1:9"),
        gemini_model: String::from("gemini-pro"),
        gemini_timeout_secs: 5,
        session_idle_secs: 1800,
        max_sessions: 1000,
        base_path: String::from("/"),
        static_path: format!("{}/static", env!("CARGO_MANIFEST_DIR")),
    }
}

/// Creates a test application router that answers from the fallback
/// table only.
pub fn test_app() -> Router {
    test_app_with_config(test_config())
}

pub fn test_app_with_config(config: AppConfig) -> Router {
    app(test_state(config))
}

/// Shared state for tests that need to inspect the store directly.
/// Pass a clone to `app`.
pub fn test_state(config: AppConfig) -> SharedState {
    let app_state = AppState::new(config).expect("Failed to build app state");
    Arc::new(RwLock::new(app_state))
}

pub fn test_app_with_advisor(advisor: FitnessAdvisor) -> Router {
    let app_state =
        AppState::with_advisor(test_config(), advisor).expect("Failed to build app state");
    app(Arc::new(RwLock::new(app_state)))
}

pub fn fallback_only_advisor() -> FitnessAdvisor {
    FitnessAdvisor::new(None, FallbackTable::default())
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

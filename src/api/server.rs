use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Result;
use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, extract::Request, response::Response};
use chrono::Utc;
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::pages;
use super::routes;
use crate::api::state::{AppState, SharedState};
use crate::core::AppConfig;

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

/// Build the router. Every route lives under the configured base
/// path, e.g. `/surefit-gym/api/chat/sessions`.
pub fn app(shared_state: SharedState) -> Router {
    let (base_path, static_path) = {
        let state = shared_state.read().expect("Unable to read share state");
        (
            state.config.base_path.clone(),
            state.config.static_path.clone(),
        )
    };
    let cors = CorsLayer::permissive();

    let mut router = Router::new()
        // Landing page
        .route(&base_path, get(pages::index))
        .route(&format!("{}health", base_path), get(pages::health))
        // API routes
        .nest(&format!("{}api", base_path), routes::router())
        // Static assets in ./static
        .nest_service(
            &format!("{}static", base_path),
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new(static_path)),
        );

    // Send `/surefit-gym` to `/surefit-gym/` so relative links resolve
    if base_path != "/" {
        let target = base_path.clone();
        router = router.route(
            base_path.trim_end_matches('/'),
            get(move || {
                let target = target.clone();
                async move { Redirect::permanent(&target) }
            }),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// How often idle chat sessions are swept out of the store
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drop idle chat sessions so the store doesn't grow for
/// the life of the process.
fn spawn_session_sweeper(shared_state: SharedState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let mut state = shared_state.write().expect("Unable to write share state");
            let removed = state.sessions.evict_idle(Utc::now());
            tracing::debug!(
                "Session sweep removed {}, {} remaining",
                removed,
                state.sessions.len()
            );
        }
    });
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = AppState::new(config)?;
    tracing::info!(
        "Chat advisor mode: {}",
        if app_state.advisor.is_live() {
            "live"
        } else {
            "fallback only"
        }
    );
    let base_path = app_state.config.base_path.clone();
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));
    spawn_session_sweeper(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::debug!(
        "Server started. Listening on {} at {}",
        listener.local_addr()?,
        base_path
    );

    axum::serve(listener, app).await?;
    Ok(())
}

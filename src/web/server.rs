//! Router and server lifecycle.

use super::handlers;
use super::pages::Header;
use crate::libs::counters::CounterCache;
use crate::libs::messages::Message;
use crate::libs::session::{Identity, SessionGate};
use crate::libs::store::TaskStore;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state
pub struct AppState {
    pub store: TaskStore,
    pub gate: SessionGate,
    pub counters: CounterCache,
    /// Public origin for share links.
    pub base_url: String,
    pub date_format: String,
}

impl AppState {
    pub fn header<'a>(&self, identity: Option<&'a Identity>) -> Header<'a> {
        Header {
            identity,
            sign_in_url: self.gate.sign_in_url(),
            sign_out_url: self.gate.sign_out_url(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/healthz", get(handlers::home::healthz))
        .route("/dashboard", get(handlers::dashboard::index))
        .route("/dashboard/tasks", post(handlers::dashboard::create))
        .route("/dashboard/tasks/{id}/delete", post(handlers::dashboard::delete))
        .route("/dashboard/live", get(handlers::live::handler))
        .route("/dashboard/task/{id}", get(handlers::task::show))
        .route("/dashboard/task/{id}/comments", post(handlers::task::add_comment))
        .route(
            "/dashboard/task/{id}/comments/{comment_id}/delete",
            post(handlers::task::delete_comment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C.
pub async fn start(state: Arc<AppState>, address: &str) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!("{}", Message::ServerStarting(listener.local_addr()?.to_string()));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{}", Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{}", Message::ShutdownSignalFailed(e.to_string()));
        std::future::pending::<()>().await;
    }
}

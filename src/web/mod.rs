//! HTTP surface: an axum router over the store, the session gate and the
//! counter cache.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tarefas::web::server::{self, AppState};
//!
//! # async fn run(state: AppState) -> anyhow::Result<()> {
//! server::start(Arc::new(state), "127.0.0.1:3000").await
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod pages;
pub mod server;

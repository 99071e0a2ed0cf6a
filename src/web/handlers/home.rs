use crate::web::error::WebError;
use crate::web::extract::CurrentSession;
use crate::web::pages;
use crate::web::server::AppState;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

pub async fn index(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, WebError> {
    let counters = state.counters.get()?;
    Ok(Html(pages::home(&state.header(session.identity()), &counters)))
}

pub async fn healthz() -> &'static str {
    "ok"
}

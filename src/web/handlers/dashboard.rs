//! The signed-in user's task board.
//!
//! Form posts always end in a redirect back to `/dashboard`; failures are
//! logged, not shown. The list itself refreshes over the live feed.

use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::libs::task::NewTask;
use crate::web::error::WebError;
use crate::web::extract::RequireSession;
use crate::web::pages;
use crate::web::server::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

const DASHBOARD: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Present only when the checkbox is ticked.
    #[serde(default)]
    pub is_public: Option<String>,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    RequireSession(identity): RequireSession,
) -> Result<Html<String>, WebError> {
    let tasks = state.store.own_tasks(&identity.email)?;
    Ok(Html(pages::dashboard(
        &state.header(Some(&identity)),
        &tasks,
        &state.base_url,
        &state.date_format,
    )))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    RequireSession(identity): RequireSession,
    Form(form): Form<TaskForm>,
) -> Redirect {
    let task = NewTask::new(&identity.email, &form.title, &form.description, form.is_public.is_some());

    match state.store.create_task(&identity, &task) {
        Ok(id) => tracing::info!("{}", Message::TaskCreated(id)),
        Err(StoreError::Validation(reason)) => tracing::warn!("{}", Message::TaskRejected(reason.to_string())),
        Err(e @ StoreError::Forbidden { .. }) => tracing::warn!("{}", Message::TaskRejected(e.to_string())),
        Err(e) => tracing::error!("{}", Message::TaskCreateFailed(e.to_string())),
    }

    Redirect::to(DASHBOARD)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    RequireSession(identity): RequireSession,
    Path(id): Path<String>,
) -> Redirect {
    match state.store.delete_task(&identity, &id) {
        Ok(true) => tracing::info!("{}", Message::TaskDeleted(id)),
        Ok(false) => tracing::info!("{}", Message::TaskNothingToDelete(id)),
        Err(StoreError::Forbidden { .. }) => tracing::warn!("{}", Message::TaskDeleteForbidden(id)),
        Err(e) => tracing::error!("{}", Message::TaskDeleteFailed(id, e.to_string())),
    }

    Redirect::to(DASHBOARD)
}

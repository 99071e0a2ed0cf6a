//! Public task pages and their comment threads.

use crate::libs::comment::add_comment as post_comment;
use crate::libs::detail::{self, DetailOutcome};
use crate::libs::messages::Message;
use crate::libs::store::StoreError;
use crate::web::error::WebError;
use crate::web::extract::{CurrentSession, RequireSession};
use crate::web::pages;
use crate::web::server::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

fn detail_path(id: &str) -> String {
    format!("/dashboard/task/{}", id)
}

/// Private and missing tasks get the same redirect.
pub async fn show(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    match detail::resolve(&state.store, &id, &state.date_format)? {
        DetailOutcome::Render(detail) => {
            Ok(Html(pages::task_detail(&state.header(session.identity()), &detail)).into_response())
        }
        DetailOutcome::Hidden => Ok(Redirect::temporary("/").into_response()),
    }
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Redirect {
    match post_comment(&state.store, session.identity(), &id, &form.comment) {
        Ok(Some(comment)) => tracing::info!("{}", Message::CommentCreated(comment.id, id.clone())),
        Ok(None) => tracing::debug!("{}", Message::CommentSkipped),
        Err(e @ (StoreError::Validation(_) | StoreError::Forbidden { .. })) => {
            tracing::warn!("{}", Message::CommentCreateFailed(e.to_string()))
        }
        Err(e) => tracing::error!("{}", Message::CommentCreateFailed(e.to_string())),
    }

    Redirect::to(&detail_path(&id))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    RequireSession(identity): RequireSession,
    Path((id, comment_id)): Path<(String, String)>,
) -> Redirect {
    match state.store.delete_comment(&identity, &comment_id) {
        Ok(true) => tracing::info!("{}", Message::CommentDeleted(comment_id)),
        Ok(false) => {}
        Err(StoreError::Forbidden { .. }) => tracing::warn!("{}", Message::CommentDeleteForbidden(comment_id)),
        Err(e) => tracing::error!("{}", Message::CommentDeleteFailed(comment_id, e.to_string())),
    }

    Redirect::to(&detail_path(&id))
}

//! Session extractors.
//!
//! [`CurrentSession`] never rejects; [`RequireSession`] short-circuits with a
//! redirect to `/` when the gate resolves to unauthenticated. Reads get a 307,
//! form posts a 303 so the browser follows up with a GET.

use super::server::AppState;
use crate::libs::messages::Message;
use crate::libs::session::{Identity, SessionState};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Method;
use axum::response::Redirect;
use std::sync::Arc;

/// The session of the current request, whatever it resolved to.
pub struct CurrentSession(pub SessionState);

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        Ok(CurrentSession(state.gate.resolve(&parts.headers).await))
    }
}

/// An authenticated identity. Protected handlers take this.
pub struct RequireSession(pub Identity);

impl FromRequestParts<Arc<AppState>> for RequireSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        match state.gate.resolve(&parts.headers).await {
            SessionState::Authenticated(identity) => Ok(RequireSession(identity)),
            SessionState::Unauthenticated => {
                tracing::info!("{}", Message::SessionMissingRedirect(parts.uri.path().to_string()));
                Err(match parts.method {
                    Method::GET | Method::HEAD => Redirect::temporary("/"),
                    _ => Redirect::to("/"),
                })
            }
        }
    }
}

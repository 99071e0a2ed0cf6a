//! Session gate: resolves the identity attached to an inbound request.
//!
//! The gate never fails. Anything other than a provider session carrying a
//! user email, including provider outages, resolves to
//! [`SessionState::Unauthenticated`]; protected pages turn that into a
//! temporary redirect to `/`.

use crate::api::{Credentials, IdentityProvider, SessionUser};
use crate::libs::messages::Message;
use axum::http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;

/// An authenticated user. `email` is the identity string stored as task owner
/// and comment author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub email: String,
    pub name: Option<String>,
}

impl Identity {
    pub fn new(email: &str, name: Option<&str>) -> Self {
        Identity {
            email: email.to_string(),
            name: name.map(str::to_string),
        }
    }

    fn from_user(user: SessionUser) -> Option<Self> {
        let email = user.email.filter(|email| !email.trim().is_empty())?;
        let name = user.name.filter(|name| !name.trim().is_empty());
        Some(Identity { email, name })
    }

    /// Display name when the provider supplied one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(Identity),
    Unauthenticated,
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn into_identity(self) -> Option<Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Unauthenticated => None,
        }
    }
}

#[derive(Clone)]
pub struct SessionGate {
    provider: Arc<dyn IdentityProvider>,
}

impl SessionGate {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Asks the provider once. No retry.
    pub async fn resolve(&self, headers: &HeaderMap) -> SessionState {
        let credentials = Credentials::from_headers(headers);
        match self.provider.session(&credentials).await {
            Ok(Some(user)) => match Identity::from_user(user) {
                Some(identity) => SessionState::Authenticated(identity),
                None => SessionState::Unauthenticated,
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!("{}", Message::IdentityProviderUnavailable(e.to_string()));
                SessionState::Unauthenticated
            }
        }
    }

    pub fn sign_in_url(&self) -> String {
        self.provider.sign_in_url()
    }

    pub fn sign_out_url(&self) -> String {
        self.provider.sign_out_url()
    }
}

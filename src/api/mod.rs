//! Client side of the external identity provider.
//!
//! Sign-in, sign-out and session issuance all live in the provider; this
//! application only asks it "who owns these request credentials?". The
//! [`IdentityProvider`] trait is that question, and [`RemoteIdentityProvider`]
//! answers it over HTTP.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::api::{Credentials, IdentityConfig, IdentityProvider, RemoteIdentityProvider};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let provider = RemoteIdentityProvider::new(&IdentityConfig::default());
//! let credentials = Credentials { cookie: Some("session-token=abc".into()), authorization: None };
//! if let Some(user) = provider.session(&credentials).await? {
//!     println!("signed in as {:?}", user.email);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

pub mod identity;

pub use identity::{IdentityConfig, IdentityError, RemoteIdentityProvider};

/// Request credentials forwarded verbatim to the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

impl Credentials {
    /// Picks the `Cookie` and `Authorization` headers out of an inbound request.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
        Self {
            cookie: value(header::COOKIE),
            authorization: value(header::AUTHORIZATION),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cookie.is_none() && self.authorization.is_none()
    }
}

/// The user object of a provider session. Providers may omit any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Session lookup against an identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the user bound to `credentials`, or `Ok(None)` when the
    /// provider reports no session.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot be reached or answers with
    /// something that is not a session document.
    async fn session(&self, credentials: &Credentials) -> Result<Option<SessionUser>, IdentityError>;

    /// Where the browser goes to sign in.
    fn sign_in_url(&self) -> String;

    /// Where the browser goes to sign out.
    fn sign_out_url(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_credentials_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("session-token=abc"));
        let credentials = Credentials::from_headers(&headers);
        assert_eq!(credentials.cookie.as_deref(), Some("session-token=abc"));
        assert_eq!(credentials.authorization, None);
        assert!(!credentials.is_empty());
        assert!(Credentials::from_headers(&HeaderMap::new()).is_empty());
    }
}

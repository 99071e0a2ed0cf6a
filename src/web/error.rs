//! Errors that reach an HTTP response.

use crate::libs::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// The store could not be read while rendering a page.
    #[error("store read failed: {0}")]
    Store(#[from] StoreError),
}

impl WebError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        // Never leak store details to the browser
        (self.status_code(), "Internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_are_internal() {
        let error = WebError::from(StoreError::Database(rusqlite::Error::InvalidQuery));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

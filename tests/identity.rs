#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};
    use std::sync::Arc;
    use tarefas::api::identity::DEFAULT_SESSION_PATH;
    use tarefas::api::{Credentials, IdentityConfig, IdentityProvider, RemoteIdentityProvider};
    use tarefas::libs::session::{Identity, SessionGate, SessionState};

    const COOKIE: &str = "next-auth.session-token=abc";

    fn provider(server: &mockito::ServerGuard) -> RemoteIdentityProvider {
        RemoteIdentityProvider::new(&IdentityConfig {
            url: server.url(),
            session_path: DEFAULT_SESSION_PATH.to_string(),
        })
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(COOKIE));
        headers
    }

    async fn gate_with(body: &str, status: usize) -> (mockito::ServerGuard, SessionGate) {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", DEFAULT_SESSION_PATH)
            .match_header("cookie", COOKIE)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        let gate = SessionGate::new(Arc::new(provider(&server)));
        (server, gate)
    }

    #[tokio::test]
    async fn test_cookie_is_forwarded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", DEFAULT_SESSION_PATH)
            .match_header("cookie", COOKIE)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"user":{"email":"ana@example.com","name":"Ana"},"expires":"2030-01-01T00:00:00.000Z"}"#)
            .create_async()
            .await;

        let credentials = Credentials::from_headers(&headers());
        let user = provider(&server).session(&credentials).await.unwrap().unwrap();

        assert_eq!(user.email.as_deref(), Some("ana@example.com"));
        assert_eq!(user.name.as_deref(), Some("Ana"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_session_resolves_identity() {
        let (_server, gate) = gate_with(r#"{"user":{"email":"ana@example.com","name":"Ana"}}"#, 200).await;

        assert_eq!(
            gate.resolve(&headers()).await,
            SessionState::Authenticated(Identity::new("ana@example.com", Some("Ana")))
        );
    }

    #[tokio::test]
    async fn test_empty_session_is_unauthenticated() {
        let (_server, gate) = gate_with("{}", 200).await;
        assert_eq!(gate.resolve(&headers()).await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_user_without_email_is_unauthenticated() {
        let (_server, gate) = gate_with(r#"{"user":{"name":"Ana"}}"#, 200).await;
        assert_eq!(gate.resolve(&headers()).await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_provider_failure_is_unauthenticated() {
        let (_server, gate) = gate_with("oops", 500).await;
        assert_eq!(gate.resolve(&headers()).await, SessionState::Unauthenticated);

        let (_server, gate) = gate_with("not json", 200).await;
        assert_eq!(gate.resolve(&headers()).await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_missing_name_keeps_identity() {
        let (_server, gate) = gate_with(r#"{"user":{"email":"ana@example.com","name":null}}"#, 200).await;

        let identity = gate.resolve(&headers()).await.into_identity().unwrap();
        assert_eq!(identity.email, "ana@example.com");
        assert_eq!(identity.display_name(), None);
    }
}

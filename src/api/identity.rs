use super::{Credentials, IdentityProvider, SessionUser};
use crate::libs::{config::ConfigModule, messages::Message};
use crate::msg_print;
use anyhow::Result;
use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{AUTHORIZATION, COOKIE},
    Client,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SIGN_IN_URL: &str = "api/auth/signin";
const SIGN_OUT_URL: &str = "api/auth/signout";
pub const DEFAULT_SESSION_PATH: &str = "/api/auth/session";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("identity provider answered with status {0}")]
    Status(u16),
}

/// Session document returned by the provider. An empty object means "no session".
#[derive(Debug, Default, Deserialize)]
struct ProviderSession {
    #[serde(default)]
    user: Option<SessionUser>,
}

/// Identity provider reached over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteIdentityProvider {
    client: Client,
    config: IdentityConfig,
}

impl RemoteIdentityProvider {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[async_trait]
impl IdentityProvider for RemoteIdentityProvider {
    async fn session(&self, credentials: &Credentials) -> Result<Option<SessionUser>, IdentityError> {
        // Without credentials there is nothing the provider could bind a session to.
        if credentials.is_empty() {
            return Ok(None);
        }

        let mut request = self.client.get(self.url(&self.config.session_path));
        if let Some(cookie) = &credentials.cookie {
            request = request.header(COOKIE, cookie);
        }
        if let Some(authorization) = &credentials.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        let res = request.send().await?;
        if !res.status().is_success() {
            return Err(IdentityError::Status(res.status().as_u16()));
        }

        let session = res.json::<ProviderSession>().await?;
        Ok(session.user)
    }

    fn sign_in_url(&self) -> String {
        self.url(SIGN_IN_URL)
    }

    fn sign_out_url(&self) -> String {
        self.url(SIGN_OUT_URL)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdentityConfig {
    /// Base URL of the identity provider.
    pub url: String,
    /// Path of the session endpoint, relative to `url`.
    #[serde(default = "default_session_path")]
    pub session_path: String,
}

fn default_session_path() -> String {
    DEFAULT_SESSION_PATH.to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3001".to_string(),
            session_path: default_session_path(),
        }
    }
}

impl IdentityConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "identity".to_string(),
            name: "Identity provider".to_string(),
        }
    }

    pub fn init(config: &Option<IdentityConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleIdentity);
        Ok(Self {
            url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIdentityUrl.to_string())
                .default(config.url)
                .interact_text()?,
            session_path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIdentitySessionPath.to_string())
                .default(config.session_path)
                .interact_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out_urls() {
        let provider = RemoteIdentityProvider::new(&IdentityConfig {
            url: "https://auth.example.com/".to_string(),
            session_path: DEFAULT_SESSION_PATH.to_string(),
        });
        assert_eq!(provider.sign_in_url(), "https://auth.example.com/api/auth/signin");
        assert_eq!(provider.sign_out_url(), "https://auth.example.com/api/auth/signout");
    }

    #[tokio::test]
    async fn test_no_credentials_skips_the_provider() {
        // Nothing listens on this port; a request would fail.
        let provider = RemoteIdentityProvider::new(&IdentityConfig {
            url: "http://127.0.0.1:9".to_string(),
            session_path: DEFAULT_SESSION_PATH.to_string(),
        });
        let user = provider.session(&Credentials::default()).await.unwrap();
        assert_eq!(user, None);
    }
}

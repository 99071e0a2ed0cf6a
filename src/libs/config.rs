//! Application configuration.
//!
//! Settings live in `config.json` inside the [`DataStorage`] directory. Every
//! module is optional; a missing module means "use the defaults". After
//! reading, [`Config::apply_env`] layers `TAREFAS_*` environment variables
//! (and a `.env` file, if present) on top.
//!
//! ```rust,no_run
//! use tarefas::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("listening on {}", config.server().address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::DEFAULT_DATE_FORMAT;
use crate::api::IdentityConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A selectable entry in the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public origin used to build share links.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StoreConfig {
    /// Database file. `None` puts `tarefas.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HomeConfig {
    pub revalidate_secs: u64,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self { revalidate_secs: 60 }
    }
}

impl HomeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// `chrono` strftime pattern for task creation dates.
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<HomeConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseFailed(e.to_string())))
    }

    /// [`read`](Self::read) followed by [`apply_env`](Self::apply_env).
    pub fn load() -> Result<Config> {
        let mut config = Self::read()?;
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the config file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive wizard. Prompts are pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            IdentityConfig::module(),
            ConfigModule {
                key: "store".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "home".to_string(),
                name: "Home page".to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: "Display".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                        base_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerBaseUrl.to_string())
                            .default(default.base_url)
                            .interact_text()?,
                    });
                }
                "identity" => config.identity = Some(IdentityConfig::init(&config.identity)?),
                "store" => {
                    let default = config.store.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStore);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStorePath.to_string())
                        .default(default.path.map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.store = Some(StoreConfig {
                        path: (!path.trim().is_empty()).then(|| PathBuf::from(path.trim())),
                    });
                }
                "home" => {
                    let default = config.home.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleHome);
                    config.home = Some(HomeConfig {
                        revalidate_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRevalidateSecs.to_string())
                            .default(default.revalidate_secs)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        date_format: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDateFormat.to_string())
                            .default(default.date_format)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Applies `TAREFAS_*` overrides. Unparsable values are reported and ignored.
    pub fn apply_env(&mut self) {
        dotenv::dotenv().ok();

        if let Ok(host) = env::var("TAREFAS_HOST") {
            self.server.get_or_insert_with(Default::default).host = host;
        }
        if let Ok(port) = env::var("TAREFAS_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.get_or_insert_with(Default::default).port = port,
                Err(_) => msg_warning!(Message::ConfigInvalidEnv("TAREFAS_PORT".to_string(), port)),
            }
        }
        if let Ok(base_url) = env::var("TAREFAS_BASE_URL") {
            self.server.get_or_insert_with(Default::default).base_url = base_url;
        }
        if let Ok(url) = env::var("TAREFAS_IDENTITY_URL") {
            self.identity.get_or_insert_with(Default::default).url = url;
        }
        if let Ok(path) = env::var("TAREFAS_DB_PATH") {
            self.store.get_or_insert_with(Default::default).path = Some(PathBuf::from(path));
        }
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn identity(&self) -> IdentityConfig {
        self.identity.clone().unwrap_or_default()
    }

    pub fn store(&self) -> StoreConfig {
        self.store.clone().unwrap_or_default()
    }

    pub fn home(&self) -> HomeConfig {
        self.home.clone().unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_modules_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"home":{"revalidate_secs":5}}"#).unwrap();
        assert_eq!(config.home().interval(), Duration::from_secs(5));
        assert_eq!(config.server().address(), "127.0.0.1:3000");
        assert_eq!(config.display().date_format, "%d/%m/%Y");
        assert_eq!(config.store().path, None);
    }

    #[test]
    fn test_empty_modules_are_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, "{}");
    }
}

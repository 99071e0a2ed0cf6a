#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tarefas::api::IdentityConfig;
    use tarefas::libs::config::{Config, HomeConfig, ServerConfig, CONFIG_FILE_NAME};
    use tarefas::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // Only test in this file that touches HOME
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::delete().unwrap());

        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                base_url: "https://tarefas.example.com".to_string(),
            }),
            identity: Some(IdentityConfig {
                url: "https://auth.example.com".to_string(),
                ..IdentityConfig::default()
            }),
            home: Some(HomeConfig { revalidate_secs: 10 }),
            ..Config::default()
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.identity().session_path, "/api/auth/session");
        assert_eq!(loaded.display().date_format, "%d/%m/%Y");

        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("TAREFAS_PORT", "4000");
        std::env::set_var("TAREFAS_BASE_URL", "https://share.example.com");
        std::env::set_var("TAREFAS_DB_PATH", "/tmp/tarefas-test.db");
        std::env::set_var("TAREFAS_IDENTITY_URL", "https://auth.example.com");

        let mut config = Config::default();
        config.apply_env();

        std::env::remove_var("TAREFAS_PORT");
        std::env::remove_var("TAREFAS_BASE_URL");
        std::env::remove_var("TAREFAS_DB_PATH");
        std::env::remove_var("TAREFAS_IDENTITY_URL");

        assert_eq!(config.server().port, 4000);
        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().base_url, "https://share.example.com");
        assert_eq!(config.store().path, Some(PathBuf::from("/tmp/tarefas-test.db")));
        assert_eq!(config.identity().url, "https://auth.example.com");
        assert_eq!(config.home, None);
    }
}

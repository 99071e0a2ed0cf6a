use super::migrations::init_with_migrations;
use crate::libs::config::StoreConfig;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "tarefas.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database, falling back to the data directory.
    pub fn from_config(config: &StoreConfig) -> Result<Db> {
        Self::open(Self::path(config)?)
    }

    pub fn path(config: &StoreConfig) -> Result<PathBuf> {
        match &config.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Opens (or creates) the database at `path` and applies pending migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Raw connection to the configured database, for inspecting migration state.
    pub fn new_without_migrations(config: &StoreConfig) -> Result<Connection> {
        Ok(Connection::open(Self::path(config)?)?)
    }
}

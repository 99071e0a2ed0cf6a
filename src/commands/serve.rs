//! Runs the web server.

use crate::api::RemoteIdentityProvider;
use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::counters::CounterCache;
use crate::libs::messages::Message;
use crate::libs::session::SessionGate;
use crate::libs::store::TaskStore;
use crate::web::server::{self, AppState};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::load()?;
    let mut server_config = config.server();
    if let Some(port) = args.port {
        server_config.port = port;
    }
    if !(server_config.base_url.starts_with("http://") || server_config.base_url.starts_with("https://")) {
        msg_bail_anyhow!(Message::ConfigInvalidBaseUrl(server_config.base_url));
    }

    let store = TaskStore::new(Db::from_config(&config.store())?);
    let provider = RemoteIdentityProvider::new(&config.identity());

    let state = AppState {
        counters: CounterCache::new(store.clone(), config.home().interval()),
        store,
        gate: SessionGate::new(Arc::new(provider)),
        base_url: server_config.base_url.clone(),
        date_format: config.display().date_format,
    };

    server::start(Arc::new(state), &server_config.address()).await
}

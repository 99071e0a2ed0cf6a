use crate::db::db::Db;
use crate::libs::{config::Config, messages::Message, store::TaskStore, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::load()?;
    let store = TaskStore::new(Db::from_config(&config.store())?);

    msg_print!(Message::CountersHeader, true);
    View::counters(&store.counts()?);

    Ok(())
}

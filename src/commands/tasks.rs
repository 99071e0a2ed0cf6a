//! Lists stored tasks, newest first.

use crate::db::db::Db;
use crate::libs::{config::Config, messages::Message, store::TaskStore, task::TaskFilter, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Only show tasks owned by this email
    #[arg(short, long)]
    owner: Option<String>,
}

pub fn cmd(args: TasksArgs) -> Result<()> {
    let config = Config::load()?;
    let store = TaskStore::new(Db::from_config(&config.store())?);

    let filter = match args.owner {
        Some(owner) => TaskFilter::Owner(owner),
        None => TaskFilter::All,
    };
    let tasks = store.list_tasks(&filter)?;

    if tasks.is_empty() {
        if let TaskFilter::Owner(owner) = filter {
            msg_info!(Message::TasksNotFoundForOwner(owner));
        } else {
            msg_info!(Message::TasksNotFound);
        }
        return Ok(());
    }

    if let TaskFilter::Owner(owner) = &filter {
        msg_print!(Message::TasksHeader(owner.clone()), true);
    }
    View::tasks(&tasks, &config.display().date_format);

    Ok(())
}

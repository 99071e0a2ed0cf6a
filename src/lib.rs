//! # Tarefas
//!
//! A small task board: signed-in users keep a private task list, publish
//! selected tasks on shareable pages and discuss them in comment threads.
//!
//! - **Session Gate** ([`libs::session`]): who is asking, via an external identity provider ([`api`])
//! - **Task store** ([`libs::store`] over [`db`]): tasks and comments with ownership checks
//! - **Live list** ([`libs::live`]): the owner's tasks pushed over a WebSocket
//! - **Task pages** ([`libs::detail`], [`libs::comment`]): public detail pages with comments
//! - **Home counters** ([`libs::counters`]): cached totals
//! - **Web** ([`web`]) and **CLI** ([`commands`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod web;

//! Core library modules for the tarefas application.
//!
//! - **Domain**: [`task`], [`comment`], [`timestamp`]
//! - **Store adapter**: [`store`] with its [`access`] policy and [`live`] change feed
//! - **Request-side logic**: [`session`], [`detail`], [`counters`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`formatter`], [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use tarefas::db::db::Db;
//! use tarefas::libs::session::Identity;
//! use tarefas::libs::store::TaskStore;
//! use tarefas::libs::task::NewTask;
//!
//! let store = TaskStore::new(Db::open_in_memory()?);
//! let ana = Identity::new("ana@example.com", Some("Ana"));
//! store.create_task(&ana, &NewTask::new(&ana.email, "Study", "Ch.1-3", false))?;
//! assert_eq!(store.own_tasks(&ana.email)?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod access;
pub mod comment;
pub mod config;
pub mod counters;
pub mod data_storage;
pub mod detail;
pub mod formatter;
pub mod live;
pub mod messages;
pub mod session;
pub mod store;
pub mod task;
pub mod timestamp;
pub mod view;

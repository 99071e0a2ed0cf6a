//! Database layer for the tarefas application.
//!
//! SQLite stands in for a hosted document store with two collections,
//! `tasks` and `comments`. Documents are keyed by opaque string identifiers
//! and carry store-assigned creation timestamps; nothing ties a comment to an
//! existing task.
//!
//! The modules here are plain SQL. Validation, authorization and change
//! notification happen one level up in [`crate::libs::store`].
//!
//! ## Usage
//!
//! ```rust
//! use tarefas::db::{db::Db, tasks::Tasks};
//! use tarefas::libs::task::{NewTask, TaskFilter};
//! use tarefas::libs::timestamp::Timestamp;
//!
//! let db = Db::open_in_memory()?;
//! let tasks = Tasks::new(&db.conn);
//! tasks.insert("t1", Timestamp::now(), &NewTask::new("a@example.com", "Study", "Ch.1-3", false))?;
//! assert_eq!(tasks.fetch(&TaskFilter::Owner("a@example.com".into()))?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup; every constructor applies pending migrations.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// The `comments` collection.
pub mod comments;

/// The `tasks` collection.
pub mod tasks;

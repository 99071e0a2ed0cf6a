//! Task store adapter.
//!
//! [`TaskStore`] is the only way the rest of the application touches the
//! `tasks` and `comments` collections. On top of the SQL in [`crate::db`] it
//!
//! - assigns identifiers and creation timestamps,
//! - validates [`NewTask`] / [`NewComment`] before any write,
//! - asks the [`AccessPolicy`] before every create and delete,
//! - publishes a [`ChangeEvent`] after every successful write so live
//!   subscriptions can refresh.
//!
//! The handle is cheap to clone; clones share the connection and the feed.

use super::access::{AccessPolicy, Mutation, OwnerPolicy};
use super::comment::{Comment, NewComment};
use super::counters::HomeCounters;
use super::live::{ChangeEvent, ChangeFeed, TaskSubscription};
use super::session::Identity;
use super::task::{NewTask, Task, TaskFilter};
use super::timestamp::Timestamp;
use crate::db::{comments::Comments, db::Db, tasks::Tasks};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid record: {0}")]
    Validation(&'static str),

    #[error("{actor} may not {action} {target}")]
    Forbidden {
        actor: String,
        action: &'static str,
        target: String,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("store worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone)]
pub struct TaskStore {
    conn: Arc<Mutex<Connection>>,
    feed: ChangeFeed,
    policy: Arc<dyn AccessPolicy>,
}

impl TaskStore {
    pub fn new(db: Db) -> Self {
        Self::with_policy(db, Arc::new(OwnerPolicy))
    }

    pub fn with_policy(db: Db, policy: Arc<dyn AccessPolicy>) -> Self {
        Self {
            conn: Arc::new(Mutex::new(db.conn)),
            feed: ChangeFeed::default(),
            policy,
        }
    }

    fn authorize(&self, actor: &Identity, mutation: Mutation<'_>) -> StoreResult<()> {
        if self.policy.authorize(actor, &mutation) {
            return Ok(());
        }
        Err(StoreError::Forbidden {
            actor: actor.email.clone(),
            action: mutation.action(),
            target: mutation.target().to_string(),
        })
    }

    /// Writes a new task owned by `actor` and returns its identifier.
    pub fn create_task(&self, actor: &Identity, task: &NewTask) -> StoreResult<String> {
        task.validate().map_err(StoreError::Validation)?;
        self.authorize(actor, Mutation::CreateTask(task))?;

        let id = new_id();
        Tasks::new(&self.conn.lock()).insert(&id, Timestamp::now(), task)?;
        self.feed.publish(ChangeEvent::Tasks { owner: task.user.clone() });

        Ok(id)
    }

    pub fn get_task(&self, id: &str) -> StoreResult<Option<Task>> {
        Ok(Tasks::new(&self.conn.lock()).get(id)?)
    }

    pub fn list_tasks(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        Ok(Tasks::new(&self.conn.lock()).fetch(filter)?)
    }

    /// One-shot snapshot of `owner`'s tasks, newest first.
    pub fn own_tasks(&self, owner: &str) -> StoreResult<Vec<Task>> {
        self.list_tasks(&TaskFilter::Owner(owner.to_string()))
    }

    /// Live view of `owner`'s tasks. Released when the returned value is dropped.
    pub fn subscribe_own_tasks(&self, owner: &str) -> TaskSubscription {
        TaskSubscription::new(self.clone(), self.feed.clone(), owner)
    }

    pub fn active_subscriptions(&self) -> usize {
        self.feed.active()
    }

    /// Hard-deletes a task. Its comments stay where they are.
    ///
    /// Returns `false` when no task has this id.
    pub fn delete_task(&self, actor: &Identity, id: &str) -> StoreResult<bool> {
        let conn = self.conn.lock();
        let tasks = Tasks::new(&conn);

        let Some(task) = tasks.get(id)? else {
            return Ok(false);
        };
        self.authorize(actor, Mutation::DeleteTask(&task))?;

        let removed = tasks.delete(id)? > 0;
        drop(conn);

        if removed {
            self.feed.publish(ChangeEvent::Tasks { owner: task.user });
        }
        Ok(removed)
    }

    /// All comments referencing `task_id`, in store order.
    pub fn comments_for_task(&self, task_id: &str) -> StoreResult<Vec<Comment>> {
        Ok(Comments::new(&self.conn.lock()).fetch_for_task(task_id)?)
    }

    /// Writes a comment authored by `actor`. The parent task is not looked up.
    pub fn create_comment(&self, actor: &Identity, comment: &NewComment) -> StoreResult<Comment> {
        comment.validate().map_err(StoreError::Validation)?;
        self.authorize(actor, Mutation::CreateComment(comment))?;

        let id = new_id();
        let created = Timestamp::now();
        Comments::new(&self.conn.lock()).insert(&id, created, comment)?;
        self.feed.publish(ChangeEvent::Comments {
            task_id: comment.task_id.clone(),
        });

        Ok(Comment::from_new(id, created, comment.clone()))
    }

    /// Returns `false` when no comment has this id.
    pub fn delete_comment(&self, actor: &Identity, id: &str) -> StoreResult<bool> {
        let conn = self.conn.lock();
        let comments = Comments::new(&conn);

        let Some(comment) = comments.get(id)? else {
            return Ok(false);
        };
        self.authorize(actor, Mutation::DeleteComment(&comment))?;

        let removed = comments.delete(id)? > 0;
        drop(conn);

        if removed {
            self.feed.publish(ChangeEvent::Comments { task_id: comment.task_id });
        }
        Ok(removed)
    }

    pub fn counts(&self) -> StoreResult<HomeCounters> {
        let conn = self.conn.lock();
        Ok(HomeCounters {
            tasks: Tasks::new(&conn).count()?,
            comments: Comments::new(&conn).count()?,
        })
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

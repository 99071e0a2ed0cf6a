//! Task detail resolution.
//!
//! Decides, from the task identifier alone, whether a detail page is
//! rendered. Only public tasks are rendered, for any viewer including the
//! owner; private and missing tasks both resolve to [`DetailOutcome::Hidden`],
//! which the web layer turns into a redirect to `/`.

use super::comment::CommentThread;
use super::formatter::format_date;
use super::store::{StoreResult, TaskStore};
use super::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetail {
    pub task: Task,
    /// Creation date rendered with the configured pattern.
    pub created: String,
    pub comments: CommentThread,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Render(TaskDetail),
    Hidden,
}

/// Loads the comments, then the task. A read failure on either is returned
/// as-is; the caller decides how to surface it.
pub fn resolve(store: &TaskStore, id: &str, date_format: &str) -> StoreResult<DetailOutcome> {
    let comments = store.comments_for_task(id)?;

    let Some(task) = store.get_task(id)? else {
        return Ok(DetailOutcome::Hidden);
    };
    if !task.is_public {
        return Ok(DetailOutcome::Hidden);
    }

    Ok(DetailOutcome::Render(TaskDetail {
        created: format_date(&task.created, date_format),
        comments: CommentThread::new(id, comments),
        task,
    }))
}

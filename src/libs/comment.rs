//! Comments and the per-task comment thread.
//!
//! A [`CommentThread`] is the list a task detail page works with: it starts
//! from whatever the store returned at resolve time and is then kept in sync
//! with the viewer's own additions and deletions. Each successful remote
//! write is mirrored locally so the thread never needs a reload.

use super::session::Identity;
use super::store::{StoreResult, TaskStore};
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// A comment document as stored in the `comments` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub comment: String,
    pub created: Timestamp,
    /// Author identity (session email).
    pub user: String,
    /// Author display name at the time of writing.
    pub name: String,
    pub task_id: String,
}

impl Comment {
    pub fn from_new(id: String, created: Timestamp, new: NewComment) -> Self {
        Comment {
            id,
            comment: new.comment,
            created,
            user: new.user,
            name: new.name,
            task_id: new.task_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub comment: String,
    pub user: String,
    pub name: String,
    pub task_id: String,
}

impl NewComment {
    pub fn new(task_id: &str, author: &Identity, name: &str, body: &str) -> Self {
        NewComment {
            comment: body.to_string(),
            user: author.email.clone(),
            name: name.to_string(),
            task_id: task_id.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.comment.trim().is_empty() {
            return Err("comment body is empty");
        }
        if self.user.trim().is_empty() {
            return Err("comment author is empty");
        }
        Ok(())
    }
}

/// A comment as one viewer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentEntry<'a> {
    pub comment: &'a Comment,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    task_id: String,
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(task_id: &str, comments: Vec<Comment>) -> Self {
        CommentThread {
            task_id: task_id.to_string(),
            comments,
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// The thread in display order; only the author of a comment gets a delete control.
    pub fn entries(&self, viewer: Option<&Identity>) -> Vec<CommentEntry<'_>> {
        self.comments
            .iter()
            .map(|comment| CommentEntry {
                comment,
                can_delete: viewer.is_some_and(|v| v.email == comment.user),
            })
            .collect()
    }

    /// Posts `body` as the session user and appends the stored comment.
    ///
    /// `Ok(None)` means nothing was written: no session, no display name, or a
    /// blank body.
    pub fn add(&mut self, store: &TaskStore, session: Option<&Identity>, body: &str) -> StoreResult<Option<&Comment>> {
        match add_comment(store, session, &self.task_id, body)? {
            Some(comment) => {
                self.comments.push(comment);
                Ok(self.comments.last())
            }
            None => Ok(None),
        }
    }

    /// Deletes remotely first; the local entry goes only after the store confirms.
    pub fn delete(&mut self, store: &TaskStore, actor: &Identity, id: &str) -> StoreResult<bool> {
        let removed = store.delete_comment(actor, id)?;
        if removed {
            self.comments.retain(|comment| comment.id != id);
        }
        Ok(removed)
    }
}

/// Writes a comment for `task_id` unless there is nothing to write.
pub fn add_comment(
    store: &TaskStore,
    session: Option<&Identity>,
    task_id: &str,
    body: &str,
) -> StoreResult<Option<Comment>> {
    let Some(author) = session else {
        return Ok(None);
    };
    let Some(name) = author.display_name() else {
        return Ok(None);
    };
    if body.trim().is_empty() {
        return Ok(None);
    }

    let comment = store.create_comment(author, &NewComment::new(task_id, author, name, body))?;
    Ok(Some(comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, user: &str) -> Comment {
        Comment {
            id: id.to_string(),
            comment: "hello".to_string(),
            created: Timestamp::from_seconds(1),
            user: user.to_string(),
            name: "Someone".to_string(),
            task_id: "t1".to_string(),
        }
    }

    #[test]
    fn test_entries_mark_own_comments() {
        let thread = CommentThread::new("t1", vec![comment("c1", "a@example.com"), comment("c2", "b@example.com")]);
        let viewer = Identity::new("a@example.com", Some("A"));

        let entries = thread.entries(Some(&viewer));
        assert!(entries[0].can_delete);
        assert!(!entries[1].can_delete);

        assert!(thread.entries(None).iter().all(|e| !e.can_delete));
    }

    #[test]
    fn test_validate_blank_body() {
        let author = Identity::new("a@example.com", Some("A"));
        assert_eq!(NewComment::new("t1", &author, "A", "  \n").validate(), Err("comment body is empty"));
        assert!(NewComment::new("t1", &author, "A", "ok").validate().is_ok());
    }
}

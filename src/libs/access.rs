//! Authorization for mutating store calls.
//!
//! The store asks its [`AccessPolicy`] before every create and delete, so a
//! crafted request cannot remove somebody else's task or comment just because
//! the page never rendered the button.

use super::comment::{Comment, NewComment};
use super::session::Identity;
use super::task::{NewTask, Task};

/// A write the store is about to perform.
#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    CreateTask(&'a NewTask),
    DeleteTask(&'a Task),
    CreateComment(&'a NewComment),
    DeleteComment(&'a Comment),
}

impl Mutation<'_> {
    pub fn action(&self) -> &'static str {
        match self {
            Mutation::CreateTask(_) => "create task for",
            Mutation::DeleteTask(_) => "delete task",
            Mutation::CreateComment(_) => "comment as",
            Mutation::DeleteComment(_) => "delete comment",
        }
    }

    /// Identifier of the affected document, or the impersonated identity for creates.
    pub fn target(&self) -> &str {
        match self {
            Mutation::CreateTask(task) => &task.user,
            Mutation::DeleteTask(task) => &task.id,
            Mutation::CreateComment(comment) => &comment.user,
            Mutation::DeleteComment(comment) => &comment.id,
        }
    }
}

pub trait AccessPolicy: Send + Sync {
    fn authorize(&self, actor: &Identity, mutation: &Mutation<'_>) -> bool;
}

/// Only the owner of a task (or author of a comment) may create or delete it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerPolicy;

impl AccessPolicy for OwnerPolicy {
    fn authorize(&self, actor: &Identity, mutation: &Mutation<'_>) -> bool {
        let owner = match mutation {
            Mutation::CreateTask(task) => &task.user,
            Mutation::DeleteTask(task) => &task.user,
            Mutation::CreateComment(comment) => &comment.user,
            Mutation::DeleteComment(comment) => &comment.user,
        };
        *owner == actor.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::timestamp::Timestamp;

    fn comment(user: &str) -> Comment {
        Comment {
            id: "c1".to_string(),
            comment: "nice".to_string(),
            created: Timestamp::from_seconds(0),
            user: user.to_string(),
            name: "Ana".to_string(),
            task_id: "t1".to_string(),
        }
    }

    #[test]
    fn test_owner_policy_matches_email() {
        let ana = Identity::new("ana@example.com", Some("Ana"));
        let bob = Identity::new("bob@example.com", Some("Bob"));
        let c = comment("ana@example.com");

        assert!(OwnerPolicy.authorize(&ana, &Mutation::DeleteComment(&c)));
        assert!(!OwnerPolicy.authorize(&bob, &Mutation::DeleteComment(&c)));

        let task = NewTask::new("ana@example.com", "Study", "", false);
        assert!(OwnerPolicy.authorize(&ana, &Mutation::CreateTask(&task)));
        assert!(!OwnerPolicy.authorize(&bob, &Mutation::CreateTask(&task)));
    }
}

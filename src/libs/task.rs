use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// A task document as stored in the `tasks` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created: Timestamp,
    /// Owner identity (session email). Never changes after creation.
    pub user: String,
    pub is_public: bool,
}

/// Write payload for a new task. Identifier and creation time are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub user: String,
    #[serde(default)]
    pub is_public: bool,
}

impl NewTask {
    pub fn new(user: &str, title: &str, description: &str, is_public: bool) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.to_string(),
            user: user.to_string(),
            is_public,
        }
    }

    /// Checks the required fields. Returns the reason for the first failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("task title is empty");
        }
        if self.user.trim().is_empty() {
            return Err("task owner is empty");
        }
        Ok(())
    }
}

/// Which tasks a listing returns. Listings are always newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Owner(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_title() {
        assert!(NewTask::new("a@example.com", "", "x", false).validate().is_err());
        assert!(NewTask::new("a@example.com", "   ", "x", false).validate().is_err());
        assert!(NewTask::new("a@example.com", "Study", "", false).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_owner() {
        assert_eq!(NewTask::new("", "Study", "x", false).validate(), Err("task owner is empty"));
    }
}

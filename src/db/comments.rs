use crate::libs::comment::{Comment, NewComment};
use crate::libs::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_COMMENT: &str =
    "INSERT INTO comments (id, comment, created_seconds, created_nanos, user, name, task_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_COMMENTS: &str = "SELECT id, comment, created_seconds, created_nanos, user, name, task_id FROM comments";
const WHERE_ID: &str = "WHERE id = ?1";
// Insertion order, the store's natural order
const WHERE_TASK_ID: &str = "WHERE task_id = ?1 ORDER BY rowid";
const DELETE_COMMENT: &str = "DELETE FROM comments WHERE id = ?1";
const COUNT_COMMENTS: &str = "SELECT COUNT(*) FROM comments";

/// SQL access to the `comments` collection. `task_id` is never checked
/// against `tasks`.
pub struct Comments<'a> {
    conn: &'a Connection,
}

impl<'a> Comments<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Comments { conn }
    }

    pub fn insert(&self, id: &str, created: Timestamp, comment: &NewComment) -> Result<()> {
        self.conn.execute(
            INSERT_COMMENT,
            params![id, comment.comment, created.seconds, created.nanos, comment.user, comment.name, comment.task_id],
        )?;

        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Comment>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_COMMENTS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    pub fn fetch_for_task(&self, task_id: &str) -> Result<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_COMMENTS, WHERE_TASK_ID))?;
        let rows = stmt.query_map(params![task_id], Self::from_row)?;

        rows.collect()
    }

    pub fn delete(&self, id: &str) -> Result<usize> {
        self.conn.execute(DELETE_COMMENT, params![id])
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_COMMENTS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn from_row(row: &Row<'_>) -> Result<Comment> {
        Ok(Comment {
            id: row.get(0)?,
            comment: row.get(1)?,
            created: Timestamp {
                seconds: row.get(2)?,
                nanos: row.get(3)?,
            },
            user: row.get(4)?,
            name: row.get(5)?,
            task_id: row.get(6)?,
        })
    }
}

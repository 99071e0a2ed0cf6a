use crate::libs::task::{NewTask, Task, TaskFilter};
use crate::libs::timestamp::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_TASK: &str =
    "INSERT INTO tasks (id, title, description, created_seconds, created_nanos, user, is_public) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, title, description, created_seconds, created_nanos, user, is_public FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_USER: &str = "WHERE user = ?1";
// rowid breaks ties between writes landing on the same clock tick
const ORDER_NEWEST_FIRST: &str = "ORDER BY created_seconds DESC, created_nanos DESC, rowid DESC";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// SQL access to the `tasks` collection. No validation or authorization here.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    pub fn insert(&self, id: &str, created: Timestamp, task: &NewTask) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![id, task.title, task.description, created.seconds, created.nanos, task.user, task.is_public],
        )?;

        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    pub fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let tasks = match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_NEWEST_FIRST))?;
                let rows = stmt.query_map([], Self::from_row)?;
                rows.collect::<Result<Vec<_>>>()?
            }
            TaskFilter::Owner(owner) => {
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_USER, ORDER_NEWEST_FIRST))?;
                let rows = stmt.query_map(params![owner], Self::from_row)?;
                rows.collect::<Result<Vec<_>>>()?
            }
        };

        Ok(tasks)
    }

    /// Returns the number of removed rows (0 or 1).
    pub fn delete(&self, id: &str) -> Result<usize> {
        self.conn.execute(DELETE_TASK, params![id])
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn from_row(row: &Row<'_>) -> Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            created: Timestamp {
                seconds: row.get(3)?,
                nanos: row.get(4)?,
            },
            user: row.get(5)?,
            is_public: row.get(6)?,
        })
    }
}

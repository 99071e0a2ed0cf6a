//! Display formatting for dates and share links.
//!
//! ```rust
//! use tarefas::libs::formatter::share_url;
//!
//! assert_eq!(share_url("https://tarefas.app/", "abc"), "https://tarefas.app/dashboard/task/abc");
//! ```

use super::timestamp::Timestamp;
use chrono::Local;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Renders a store timestamp in the local time zone.
pub fn format_date(created: &Timestamp, format: &str) -> String {
    created.to_datetime().with_timezone(&Local).format(format).to_string()
}

/// Public link to a task's detail page. Trailing slashes on `base_url` are ignored.
pub fn share_url(base_url: &str, task_id: &str) -> String {
    format!("{}/dashboard/task/{}", base_url.trim_end_matches('/'), task_id)
}

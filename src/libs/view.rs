use super::counters::HomeCounters;
use super::formatter::format_date;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], date_format: &str) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "OWNER", "VISIBILITY", "CREATED"]);
        for task in tasks {
            let visibility = if task.is_public { "public" } else { "private" };
            table.add_row(row![task.id, task.title, task.user, visibility, format_date(&task.created, date_format)]);
        }
        table.printstd();
    }

    pub fn counters(counters: &HomeCounters) {
        let mut table = Table::new();

        table.add_row(row!["TASKS", "COMMENTS"]);
        table.add_row(row![counters.tasks, counters.comments]);
        table.printstd();
    }
}

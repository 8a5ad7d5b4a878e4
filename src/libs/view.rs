use crate::libs::analytics::{AnalyticsSnapshot, REPORT_PERIOD_DAYS};
use crate::libs::task::{Task, STATUS_DONE, STATUS_IN_PROGRESS, STATUS_PENDING};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE DATE"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.status,
                task.priority,
                task.due_date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();
    }

    pub fn analytics(snapshot: &AnalyticsSnapshot) {
        let mut table = Table::new();

        table.add_row(row!["STATUS", "COUNT"]);
        for status in [STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_DONE] {
            table.add_row(row![status, snapshot.status_counts.get(status).copied().unwrap_or(0)]);
        }
        table.printstd();

        println!("Average execution time: {}", snapshot.average_execution_time);
        println!(
            "Last {} days: {} completed, {} overdue",
            REPORT_PERIOD_DAYS, snapshot.report_last_period.completed_tasks, snapshot.report_last_period.overdue_tasks
        );
    }
}

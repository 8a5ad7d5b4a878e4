//! Task export to CSV and JSON files.
//!
//! Exports write a flat, pre-formatted representation of the task list
//! so the files open cleanly in spreadsheets and are easy to consume
//! programmatically. The output path defaults to a date-stamped file in
//! the current directory.

use crate::libs::task::Task;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flat task row with every value rendered as a string.
#[derive(Debug, Serialize)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            priority: task.priority.clone(),
            due_date: format_timestamp(&task.due_date),
            created_at: format_timestamp(&task.created_at),
            updated_at: format_timestamp(&task.updated_at),
        }
    }
}

fn format_timestamp(value: &Option<DateTime<Utc>>) -> String {
    value.map(|value| value.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default()
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes the task list and returns the path of the created file.
    pub fn export_tasks(&self, tasks: &[Task]) -> Result<PathBuf> {
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("tasks_{}.{}", Local::now().format("%Y-%m-%d"), self.extension())));

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path).context("failed to create export file")?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let mut file = File::create(&path).context("failed to create export file")?;
                let json = serde_json::to_string_pretty(&rows)?;
                file.write_all(json.as_bytes())?;
            }
        }

        Ok(path)
    }

    fn extension(&self) -> &'static str {
        match self.format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, help = "Output format, CSV by default")]
    format: Option<ExportFormat>,
    #[arg(short, long, help = "Output file path")]
    output: Option<PathBuf>,
    #[arg(long, help = "Filter by status")]
    status: Option<String>,
    #[arg(long, help = "Filter by priority")]
    priority: Option<String>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        ..Default::default()
    };

    let tasks = Tasks::new()?.fetch(&filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let exporter = Exporter::new(args.format.unwrap_or(ExportFormat::Csv), args.output);
    let path = exporter.export_tasks(&tasks)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}

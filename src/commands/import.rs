use crate::db::tasks::Tasks;
use crate::libs::importer::TaskImporter;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_success, msg_warning};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(help = "Path to a JSON file with an array of tasks")]
    file: PathBuf,
}

pub async fn cmd(args: ImportArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file).with_context(|| format!("failed to read {}", args.file.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&raw).context("failed to parse the import file")?;

    let store = Arc::new(Tasks::new()?);
    let importer = TaskImporter::new(store);

    match importer.import(tasks).await {
        Ok(report) => {
            msg_success!(Message::ImportCompleted(report.inserted));
            if !report.failures.is_empty() {
                msg_warning!(Message::ImportSkipped(report.failures.len()));
                for failure in &report.failures {
                    println!("  {}", failure);
                }
            }
            Ok(())
        }
        Err(err) => {
            for failure in err.failures() {
                println!("  {}", failure);
            }
            Err(err.into())
        }
    }
}

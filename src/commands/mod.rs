pub mod analytics;
pub mod cleanup;
pub mod export;
pub mod import;
pub mod init;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Import tasks from a JSON file")]
    Import(import::ImportArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Show task analytics")]
    Analytics,
    #[command(about = "Remove tasks whose due date is long past")]
    Cleanup(cleanup::CleanupArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Task(args) => task::cmd(args).await,
            Commands::Import(args) => import::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Analytics => analytics::cmd().await,
            Commands::Cleanup(args) => cleanup::cmd(args).await,
        }
    }
}

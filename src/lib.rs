//! # Tasker - Task Management Core
//!
//! A command-line utility for managing tasks: creation, editing, bulk
//! import, export and analytics reports.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, list and delete tasks with
//!   status, priority and due dates
//! - **Bulk Import**: Concurrent validation of JSON task batches with
//!   per-item failure reporting and atomic insertion
//! - **Analytics**: Status counts, average execution time and a
//!   trailing-period report, served through a TTL cache
//! - **Data Export**: Export tasks to CSV and JSON formats
//! - **Cleanup**: One-shot or periodic removal of long-expired tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

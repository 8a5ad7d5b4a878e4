use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{is_valid_priority, is_valid_status, validate_task, Task, TaskFilter, TaskPatch, ValidationError};
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    action: TaskAction,
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    #[command(about = "Create a new task")]
    Create(CreateArgs),
    #[command(about = "List tasks")]
    List(ListArgs),
    #[command(about = "Edit an existing task")]
    Edit(EditArgs),
    #[command(about = "Delete a task")]
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct CreateArgs {
    #[arg(help = "Task title")]
    title: Option<String>,
    #[arg(short, long, help = "Task description")]
    description: Option<String>,
    #[arg(short, long, help = "Task priority: low, medium or high")]
    priority: Option<String>,
    #[arg(long, help = "Due date (YYYY-MM-DD)")]
    due: Option<NaiveDate>,
    #[arg(short, long, help = "Initial status: pending, in_progress or done")]
    status: Option<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, help = "Filter by status")]
    status: Option<String>,
    #[arg(long, help = "Filter by priority")]
    priority: Option<String>,
    #[arg(long, help = "Filter by due date (YYYY-MM-DD)")]
    due: Option<NaiveDate>,
    #[arg(long, help = "Filter by a title substring")]
    title: Option<String>,
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(help = "Task id")]
    id: i64,
    #[arg(long, help = "New title")]
    title: Option<String>,
    #[arg(long, help = "New description")]
    description: Option<String>,
    #[arg(long, help = "New priority")]
    priority: Option<String>,
    #[arg(long, help = "New due date (YYYY-MM-DD)")]
    due: Option<NaiveDate>,
    #[arg(long, help = "New status")]
    status: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    #[arg(help = "Task id")]
    id: i64,
    #[arg(long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub async fn cmd(task_args: TaskArgs) -> Result<()> {
    match task_args.action {
        TaskAction::Create(args) => create(args),
        TaskAction::List(args) => list(args),
        TaskAction::Edit(args) => edit(args),
        TaskAction::Delete(args) => delete(args),
    }
}

fn create(args: CreateArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let priority = match args.priority {
        Some(priority) => priority,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskPriority.to_string())
            .default("medium".to_string())
            .interact_text()?,
    };
    let due = match args.due {
        Some(due) => due,
        None => {
            let raw: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDueDate.to_string())
                .interact_text()?;
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").context("invalid due date, expected YYYY-MM-DD")?
        }
    };

    let due_date = due.and_time(NaiveTime::MIN).and_utc();
    let mut task = Task::new(&title, &args.description.unwrap_or_default(), &priority, due_date);
    if let Some(status) = args.status {
        task.status = status;
    }

    validate_task(&task)?;
    task.stamp(Utc::now());
    Tasks::new()?.create(&task)?;
    msg_success!(Message::TaskCreated(task.title.clone()));

    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        due_date: args.due,
        title: args.title,
    };

    let tasks = Tasks::new()?.fetch(&filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    View::tasks(&tasks);

    Ok(())
}

fn edit(args: EditArgs) -> Result<()> {
    if let Some(status) = &args.status {
        if !is_valid_status(status) {
            return Err(ValidationError::InvalidStatus(status.clone()).into());
        }
    }
    if let Some(priority) = &args.priority {
        if !is_valid_priority(priority) {
            return Err(ValidationError::InvalidPriority(priority.clone()).into());
        }
    }

    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        status: args.status,
        priority: args.priority,
        due_date: args.due.map(|due| due.and_time(NaiveTime::MIN).and_utc()),
    };
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    Tasks::new()?.update(args.id, &patch)?;
    msg_success!(Message::TaskUpdated(args.id));

    Ok(())
}

fn delete(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    Tasks::new()?.delete(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}

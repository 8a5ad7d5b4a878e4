//! SQLite task store.
//!
//! Timestamps are stored as `YYYY-MM-DD HH:MM:SS` text in UTC, which
//! keeps them comparable both lexicographically and through SQLite's
//! `strftime`. The connection sits behind a mutex so the store can back
//! the async collaborator traits of the analytics and import services.

use super::db::Db;
use crate::libs::analytics::{AnalyticsStore, ReportPeriod, REPORT_PERIOD_DAYS};
use crate::libs::formatter::compact_duration;
use crate::libs::importer::ImportStore;
use crate::libs::task::{Task, TaskFilter, TaskPatch};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, Row, Statement};
use std::collections::HashMap;
use std::path::Path;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT '',
    priority TEXT NOT NULL,
    due_date TIMESTAMP NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, priority, due_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, title, description, status, priority, due_date, created_at, updated_at FROM tasks";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_EXPIRED: &str = "DELETE FROM tasks WHERE due_date < ?1";
const COUNT_BY_STATUS: &str = "SELECT status, COUNT(*) FROM tasks GROUP BY status";
const AVG_EXECUTION_SECONDS: &str = "SELECT AVG(strftime('%s', due_date) - strftime('%s', created_at)) FROM tasks WHERE status = 'done'";
const COUNT_COMPLETED: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'done' AND updated_at >= ?1";
const COUNT_OVERDUE: &str = "SELECT COUNT(*) FROM tasks WHERE status != 'done' AND due_date < ?1";

pub struct Tasks {
    conn: Mutex<Connection>,
}

impl Tasks {
    /// Opens the store at its default location in the application data
    /// directory.
    pub fn new() -> Result<Self> {
        Self::with_db(Db::new()?)
    }

    /// Opens the store at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: Mutex::new(db.conn) })
    }

    /// Inserts a task and returns its assigned id. Missing bookkeeping
    /// timestamps default to the insertion instant.
    pub fn create(&self, task: &Task) -> Result<i64> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(INSERT_TASK)?;
        insert_row(&mut stmt, task)?;

        Ok(conn.last_insert_rowid())
    }

    /// Applies a partial update and refreshes `updated_at`.
    pub fn update(&self, id: i64, patch: &TaskPatch) -> Result<()> {
        if patch.is_empty() {
            bail!("task patch contains no changes");
        }

        let mut set_parts: Vec<String> = Vec::new();
        let mut params_list: Vec<Value> = Vec::new();
        let push = |parts: &mut Vec<String>, list: &mut Vec<Value>, column: &str, value: Value| {
            parts.push(format!("{} = ?{}", column, list.len() + 1));
            list.push(value);
        };

        if let Some(title) = &patch.title {
            push(&mut set_parts, &mut params_list, "title", Value::Text(title.clone()));
        }
        if let Some(description) = &patch.description {
            push(&mut set_parts, &mut params_list, "description", Value::Text(description.clone()));
        }
        if let Some(status) = &patch.status {
            push(&mut set_parts, &mut params_list, "status", Value::Text(status.clone()));
        }
        if let Some(priority) = &patch.priority {
            push(&mut set_parts, &mut params_list, "priority", Value::Text(priority.clone()));
        }
        if let Some(due_date) = &patch.due_date {
            push(&mut set_parts, &mut params_list, "due_date", Value::Text(encode_ts(due_date)));
        }
        push(&mut set_parts, &mut params_list, "updated_at", Value::Text(encode_ts(&Utc::now())));

        let query = format!("UPDATE tasks SET {} WHERE id = ?{}", set_parts.join(", "), params_list.len() + 1);
        params_list.push(Value::Integer(id));

        let conn = self.conn.lock();
        let affected = conn.execute(&query, params_from_iter(params_list))?;
        if affected == 0 {
            bail!("task with id {} not found", id);
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock();
        let affected = conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            bail!("task with id {} not found", id);
        }

        Ok(())
    }

    /// Returns tasks matching the filter, newest first.
    pub fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params_list: Vec<Value> = Vec::new();

        if let Some(status) = &filter.status {
            conditions.push(format!("status = ?{}", params_list.len() + 1));
            params_list.push(Value::Text(status.clone()));
        }
        if let Some(priority) = &filter.priority {
            conditions.push(format!("priority = ?{}", params_list.len() + 1));
            params_list.push(Value::Text(priority.clone()));
        }
        if let Some(due_date) = &filter.due_date {
            conditions.push(format!("DATE(due_date) = ?{}", params_list.len() + 1));
            params_list.push(Value::Text(due_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(title) = &filter.title {
            conditions.push(format!("title LIKE ?{}", params_list.len() + 1));
            params_list.push(Value::Text(format!("%{}%", title)));
        }

        let mut query = SELECT_TASKS.to_string();
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC");

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&query)?;
        let task_iter = stmt.query_map(params_from_iter(params_list), map_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Removes tasks whose due date lies more than the report window in
    /// the past and returns how many were deleted.
    pub fn delete_expired(&self) -> Result<u64> {
        let cutoff = Utc::now() - Duration::days(REPORT_PERIOD_DAYS);
        let conn = self.conn.lock();
        let affected = conn.execute(DELETE_EXPIRED, params![encode_ts(&cutoff)])?;

        Ok(affected as u64)
    }
}

#[async_trait]
impl AnalyticsStore for Tasks {
    async fn task_count_by_status(&self) -> Result<HashMap<String, i64>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(COUNT_BY_STATUS)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;

        let mut counts = HashMap::new();
        for row in rows {
            let (status, count) = row?;
            counts.insert(status, count);
        }

        Ok(counts)
    }

    async fn average_execution_time(&self) -> Result<String> {
        let conn = self.conn.lock();
        // AVG over an empty set is NULL, reported as a zero duration
        let avg: Option<f64> = conn.query_row(AVG_EXECUTION_SECONDS, [], |row| row.get(0))?;
        let duration = Duration::seconds(avg.unwrap_or(0.0) as i64);

        Ok(compact_duration(&duration))
    }

    async fn report_period(&self) -> Result<ReportPeriod> {
        let now = Utc::now();
        let since = now - Duration::days(REPORT_PERIOD_DAYS);

        let conn = self.conn.lock();
        let completed: i64 = conn.query_row(COUNT_COMPLETED, params![encode_ts(&since)], |row| row.get(0))?;
        let overdue: i64 = conn.query_row(COUNT_OVERDUE, params![encode_ts(&now)], |row| row.get(0))?;

        Ok(ReportPeriod {
            completed_tasks: completed,
            overdue_tasks: overdue,
        })
    }
}

#[async_trait]
impl ImportStore for Tasks {
    async fn import_tasks(&self, tasks: &[Task]) -> Result<usize> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_TASK)?;
            for task in tasks {
                insert_row(&mut stmt, task)?;
            }
        }
        tx.commit().context("failed to commit task import")?;

        Ok(tasks.len())
    }
}

fn insert_row(stmt: &mut Statement<'_>, task: &Task) -> Result<()> {
    let due_date = task.due_date.context("task due date is not set")?;
    let created_at = task.created_at.unwrap_or_else(Utc::now);
    let updated_at = task.updated_at.unwrap_or(created_at);

    stmt.execute(params![
        task.title,
        task.description,
        task.status,
        task.priority,
        encode_ts(&due_date),
        encode_ts(&created_at),
        encode_ts(&updated_at)
    ])?;

    Ok(())
}

fn map_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
        priority: row.get(4)?,
        due_date: Some(decode_ts(row.get::<_, String>(5)?, 5)?),
        created_at: Some(decode_ts(row.get::<_, String>(6)?, 6)?),
        updated_at: Some(decode_ts(row.get::<_, String>(7)?, 7)?),
    })
}

fn encode_ts(value: &DateTime<Utc>) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

fn decode_ts(raw: String, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err)))
}

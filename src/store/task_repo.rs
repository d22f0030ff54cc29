use chrono::{DateTime, SubsecRound, Utc};

use crate::error::TasklyError;
use crate::models::{Status, Task};

use super::file::TaskStore;

/// Next id is one past the current maximum, or 1 for an empty collection.
/// Deleted ids are never reused.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

pub fn add_task(store: &TaskStore, description: &str) -> Result<Task, TasklyError> {
    let mut tasks = store.load()?;
    let now = timestamp();
    let task = Task {
        id: next_id(&tasks),
        description: description.to_string(),
        status: Status::Todo,
        created_at: now,
        updated_at: now,
    };
    tasks.push(task.clone());
    store.save(&tasks)?;
    Ok(task)
}

pub fn update_description(
    store: &TaskStore,
    id: u64,
    description: &str,
) -> Result<Task, TasklyError> {
    let mut tasks = store.load()?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| TasklyError::task_not_found(id))?;
    task.description = description.to_string();
    task.updated_at = timestamp();
    let updated = task.clone();
    store.save(&tasks)?;
    Ok(updated)
}

pub fn delete_task(store: &TaskStore, id: u64) -> Result<(), TasklyError> {
    let mut tasks = store.load()?;
    let len_before = tasks.len();
    tasks.retain(|t| t.id != id);
    if tasks.len() == len_before {
        return Err(TasklyError::task_not_found(id));
    }
    store.save(&tasks)
}

/// Sets the status unconditionally; there is no transition restriction.
pub fn mark_status(store: &TaskStore, id: u64, status: Status) -> Result<Task, TasklyError> {
    let mut tasks = store.load()?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| TasklyError::task_not_found(id))?;
    task.status = status;
    task.updated_at = timestamp();
    let updated = task.clone();
    store.save(&tasks)?;
    Ok(updated)
}

pub fn list_tasks(store: &TaskStore, filter: Option<Status>) -> Result<Vec<Task>, TasklyError> {
    let tasks = store.load()?;
    Ok(match filter {
        Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
        None => tasks,
    })
}

// Store timestamps carry millisecond precision.
fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

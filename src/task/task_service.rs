use std::sync::Arc;

use crate::error::{AppError, Result};
use super::task_dto::CreateTaskRequest;
use super::task_models::{parse_reminder, NewTask, Task, TaskPriority};
use super::task_repository::TaskStore;
use validator::Validate;

pub const EMPTY_CONTENT_MESSAGE: &str = "Task content cannot be empty";
pub const NUL_CONTENT_MESSAGE: &str = "Task content cannot contain NUL characters";

/// Task business rules. Every mutation answers with the full, freshly read list
/// so clients can replace their view wholesale.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.store.list_all().await
    }

    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Vec<Task>> {
        let new_task = normalize(payload)?;
        let task = self.store.insert(&new_task).await?;
        tracing::info!(id = task.id, priority = task.priority, "Task created");
        self.store.list_all().await
    }

    pub async fn delete_by_content(&self, content: &str) -> Result<Vec<Task>> {
        // Stored content never holds NUL, and Postgres refuses it as a parameter.
        let removed = if content.contains('\0') {
            0
        } else {
            self.store.delete_by_content(content).await?
        };
        if removed == 0 {
            tracing::debug!(content, "No task matched delete request");
        }
        self.store.list_all().await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<Vec<Task>> {
        let removed = self.store.delete_by_id(id).await?;
        if removed == 0 {
            tracing::debug!(id, "No task matched delete request");
        }
        self.store.list_all().await
    }

    pub async fn is_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// Trims content, maps the priority label and parses the reminder.
pub fn normalize(payload: CreateTaskRequest) -> Result<NewTask> {
    let content = payload.content.as_deref().unwrap_or_default().trim().to_string();
    if content.is_empty() {
        return Err(AppError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
    }
    if content.contains('\0') {
        return Err(AppError::Validation(NUL_CONTENT_MESSAGE.to_string()));
    }

    let priority = payload
        .priority
        .as_deref()
        .map(TaskPriority::from_label)
        .unwrap_or_default();

    let remind_at = match payload.remind_at.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_reminder(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid reminder time: {raw}"))
        })?),
    };

    let new_task = NewTask {
        content,
        priority,
        remind_at,
    };
    new_task.validate()?;

    Ok(new_task)
}

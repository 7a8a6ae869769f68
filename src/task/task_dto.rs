use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use super::task_models::Task;

/// JSON extractor whose rejections render as `AppError` (400 with `{"error": ...}`).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// One of `low`, `medium`, `high` (case-insensitive). Anything else is medium.
    #[serde(default)]
    pub priority: Option<String>,
    /// ISO-8601 date-time. An empty string means no reminder.
    #[serde(default)]
    pub remind_at: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteTaskRequest {
    /// Exact content of the task to remove.
    pub task: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub content: String,
    pub priority: i32,
    /// `YYYY-MM-DD HH:MM`
    pub remind_at: Option<String>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            content: task.content.clone(),
            priority: task.priority,
            remind_at: task.formatted_reminder(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

impl From<Vec<Task>> for TaskListResponse {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.iter().map(TaskResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};

use crate::{error::Result, state::AppState};
use super::{
    page::render_index,
    task_dto::{AppJson, CreateTaskRequest, DeleteTaskRequest, TaskListResponse},
};

/// Server-rendered page listing every task
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Html(render_index(&tasks)))
}

/// Client script referenced by the index page
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../../static/script.js"),
    )
}

/// Create a task and return the refreshed task list
#[utoipa::path(
    post,
    path = "/add_task",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = TaskListResponse),
        (status = 400, description = "Empty content, bad reminder or malformed body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn add_task(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateTaskRequest>,
) -> Result<Json<TaskListResponse>> {
    tracing::debug!(
        content = ?payload.content,
        priority = ?payload.priority,
        remind_at = ?payload.remind_at,
        "Received add_task"
    );

    let tasks = state.task_service.create_task(payload).await?;
    Ok(Json(tasks.into()))
}

/// Delete the first task whose content matches exactly
#[utoipa::path(
    post,
    path = "/delete_task",
    request_body = DeleteTaskRequest,
    responses(
        (status = 200, description = "Task list after the delete, matched or not", body = TaskListResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DeleteTaskRequest>,
) -> Result<Json<TaskListResponse>> {
    tracing::debug!(task = %payload.task, "Received delete_task");

    let tasks = state.task_service.delete_by_content(&payload.task).await?;
    Ok(Json(tasks.into()))
}

/// Delete a task by id
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task list after the delete, matched or not", body = TaskListResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn delete_task_by_id(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<TaskListResponse>> {
    let tasks = state.task_service.delete_by_id(task_id).await?;
    Ok(Json(tasks.into()))
}

pub mod page;
pub mod task_dto;
pub mod task_handlers;
pub mod task_models;
pub mod task_repository;
pub mod task_service;

#[cfg(test)]
pub mod memory_store;

pub use task_dto::{CreateTaskRequest, DeleteTaskRequest, ErrorResponse, TaskListResponse, TaskResponse};
pub use task_handlers::{add_task, delete_task, delete_task_by_id, index, script};
pub use task_repository::{TaskRepository, TaskStore};
pub use task_service::TaskService;

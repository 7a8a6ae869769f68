use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use super::task_models::{NewTask, Task};

/// Persistence seam for tasks. Every listing is in ascending `id` order.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert(&self, task: &NewTask) -> Result<Task>;

    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Removes the first task (lowest id) whose content equals `content` exactly.
    /// Returns the number of rows removed, 0 or 1.
    async fn delete_by_content(&self, content: &str) -> Result<u64>;

    async fn delete_by_id(&self, id: i64) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn insert(&self, task: &NewTask) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (content, priority, remind_at)
             VALUES ($1, $2, $3)
             RETURNING id, content, priority, remind_at"
        )
        .bind(&task.content)
        .bind(task.priority.level())
        .bind(task.remind_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, content, priority, remind_at FROM tasks ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn delete_by_content(&self, content: &str) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM tasks WHERE id = (
                SELECT id FROM tasks WHERE content = $1 ORDER BY id ASC LIMIT 1
             )"
        )
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

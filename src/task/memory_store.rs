//! In-memory `TaskStore` used by the unit and router tests.

use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock,
};

use crate::error::{AppError, Result};
use super::task_models::{NewTask, Task};
use super::task_repository::TaskStore;

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail the way a lost database connection does.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &NewTask) -> Result<Task> {
        self.check_available()?;
        let mut inner = self.inner.write().expect("task store lock poisoned");
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            content: task.content.clone(),
            priority: task.priority.level(),
            remind_at: task.remind_at,
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        self.check_available()?;
        let inner = self.inner.read().expect("task store lock poisoned");
        Ok(inner.tasks.clone())
    }

    async fn delete_by_content(&self, content: &str) -> Result<u64> {
        self.check_available()?;
        let mut inner = self.inner.write().expect("task store lock poisoned");
        match inner.tasks.iter().position(|t| t.content == content) {
            Some(index) => {
                inner.tasks.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.check_available()?;
        let mut inner = self.inner.write().expect("task store lock poisoned");
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        Ok((before - inner.tasks.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}

//! The in-memory task collection.
//!
//! `TaskStore` owns the collection plus its guarding lock. Handlers receive it
//! through app data instead of reaching for ambient state, and every read or
//! mutation goes through a method that holds the lock only for the duration of
//! the collection access, never across request I/O.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Task;

/// Process-lifetime store for task records. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Append a new task with a server-generated id and return it.
    pub async fn create(&self, name: String) -> Task {
        let task = Task {
            name,
            id: Uuid::new_v4(),
        };
        self.tasks.write().await.push(task.clone());
        task
    }

    /// Find a task by id. `None` when no task matches.
    pub async fn get(&self, id: Uuid) -> Option<Task> {
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Replace the name of the task with the given id, leaving the id and every
    /// other record untouched. `None` when no task matches.
    pub async fn rename(&self, id: Uuid, name: String) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.name = name;
        Some(task.clone())
    }

    /// Remove every task with the given id (at most one, ids are unique).
    /// Returns whether anything was removed; removing an unknown id is not an
    /// error.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        tasks.len() != before
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

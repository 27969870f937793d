use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::task::{Task, TaskId};

/// A durable home for tasks (a remote CRM backend, a local file...).
///
/// The engine itself never talks to one of these on its own; the surrounding
/// application mirrors store mutations into a repository, typically through
/// [`crate::sync::mirror`]. How a repository moves its bytes is its own
/// concern and can be a slow, failing network call.
#[async_trait]
pub trait TaskRepository {
    /// Returns every task this repository currently holds
    async fn load_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Insert the task, or replace the stored version with the same id
    async fn upsert_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>>;

    /// Remove the task with this id. Removing an unknown id is not an error.
    async fn delete_task(&mut self, id: &TaskId) -> Result<(), Box<dyn Error>>;

    /// The last time this repository was mirrored into
    /// (or None in case it never has been)
    fn last_sync(&self) -> Option<DateTime<Utc>>;

    /// Update the last mirror timestamp to now, or to a custom time in case `timepoint` is `Some`
    fn update_last_sync(&mut self, timepoint: Option<DateTime<Utc>>);
}

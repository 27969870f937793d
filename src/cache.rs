//! A [`TaskRepository`] backed by a local JSON file

use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};
use crate::traits::TaskRepository;

/// A task repository that stores its tasks in a local file.
///
/// Mostly useful to keep a user-friendly app responsive on startup while the
/// real backend is still being reached, and as the repository the tests run
/// against.
#[derive(Debug, PartialEq)]
pub struct FileCache {
    backing_file: PathBuf,
    data: CachedData,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct CachedData {
    tasks: HashMap<TaskId, Task>,
    last_sync: Option<DateTime<Utc>>,
}

impl FileCache {
    /// Initialize a cache from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            data,
        })
    }

    /// Initialize an empty cache over the given backing file
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            data: CachedData::default(),
        }
    }

    /// Store the current contents to the backing file
    pub fn save_to_file(&self) {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            },
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.data) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }
}

#[async_trait]
impl TaskRepository for FileCache {
    async fn load_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        Ok(self.data.tasks.values().cloned().collect())
    }

    async fn upsert_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        self.data.tasks.insert(*task.id(), task.clone());
        Ok(())
    }

    async fn delete_task(&mut self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        self.data.tasks.remove(id);
        Ok(())
    }

    fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.data.last_sync
    }

    fn update_last_sync(&mut self, timepoint: Option<DateTime<Utc>>) {
        self.data.last_sync = Some(timepoint.unwrap_or_else(Utc::now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::task::TaskInput;
    use chrono::TimeZone;

    #[tokio::test]
    async fn serde_cache() {
        let cache_path = std::env::temp_dir().join("agenda-cache-test.json");

        let mut cache = FileCache::new(&cache_path);

        let task = Task::new(TaskInput::new(
            "shopping list",
            Utc.with_ymd_and_hms(2025, 1, 6, 18, 0, 0).unwrap(),
        ));
        cache.upsert_task(&task).await.unwrap();
        cache.update_last_sync(None);

        cache.save_to_file();

        let retrieved_cache = FileCache::from_file(&cache_path).unwrap();
        assert_eq!(cache, retrieved_cache);
        let _ = std::fs::remove_file(&cache_path);
    }
}

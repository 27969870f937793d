//! Mirroring the in-memory store into a durable repository
//!
//! The store is always the master: a mirror pass pushes its current tasks and
//! propagates the deletions performed since the repository was last synced.
//! Nothing ever flows back into the store here; loading a repository into a
//! fresh store at startup is the caller's one-liner over
//! [`TaskRepository::load_tasks`].

use std::error::Error;

use chrono::Utc;

use crate::store::TaskStore;
use crate::traits::TaskRepository;

/// Push the store's state into the repository.
///
/// Upserts every live task, deletes every task the store dropped since the
/// repository's last sync, then advances the repository's sync timestamp.
/// On error the timestamp is left untouched, so the next pass replays the
/// missed deletions.
pub async fn mirror<R: TaskRepository>(store: &TaskStore, repository: &mut R) -> Result<(), Box<dyn Error>> {
    let sync_start = Utc::now();

    for task in store.list() {
        repository.upsert_task(task).await?;
    }

    let deleted = match repository.last_sync() {
        Some(last_sync) => store.deleted_since(last_sync),
        // never synced: nothing the repository could still be holding on to,
        // except tasks it obtained on its own, which are not ours to delete
        None => Vec::new(),
    };
    for id in &deleted {
        repository.delete_task(id).await?;
    }

    log::info!("Mirrored {} tasks ({} deletions)", store.list().len(), deleted.len());
    repository.update_last_sync(Some(sync_start));
    Ok(())
}

/// Rebuild a store from everything the repository holds, e.g. on startup
pub async fn restore<R: TaskRepository>(repository: &R) -> Result<TaskStore, Box<dyn Error>> {
    let mut tasks = repository.load_tasks().await?;
    // repositories may hand tasks back in any order; keep the store deterministic
    tasks.sort_by_key(|t| (*t.created(), *t.id()));

    let mut store = TaskStore::new();
    for task in tasks {
        store.insert_existing(task);
    }
    Ok(store)
}

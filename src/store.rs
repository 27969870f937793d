//! The task store: the source of truth every derived view is computed from

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::subtask::{Progress, Subtask, SubtaskId, SubtaskInput};
use crate::task::{Task, TaskId, TaskInput, TaskPatch};

/// An in-memory collection of tasks.
///
/// All operations are synchronous and touch only this collection; syncing with
/// a durable backend is the caller's concern (see [`crate::sync`]). Mutations
/// that reference an unknown id return a sentinel (`None`/`false`) rather than
/// failing, so the caller can surface a "not found" condition itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStore {
    /// Kept in creation order: `list()` and the filter pipeline preserve it
    tasks: Vec<Task>,
    /// Ids of deleted tasks, by deletion time, so a later mirror pass can
    /// propagate the deletions
    deleted_tasks: BTreeMap<DateTime<Utc>, TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from the given input and store it.
    /// Returns the stored task, including its generated id.
    pub fn create(&mut self, input: TaskInput) -> &Task {
        self.tasks.push(Task::new(input));
        self.tasks.last().unwrap(/* cannot panic, we have just pushed an element */)
    }

    /// Merge a partial update onto the task with this id.
    /// Returns `None` when no such task exists.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.apply(patch);
        Some(&*task)
    }

    /// Flip only the completion flag of the task with this id.
    /// Returns `None` when no such task exists.
    pub fn set_completed(&mut self, id: &TaskId, completed: bool) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.set_completed(completed);
        Some(&*task)
    }

    /// Remove the task with this id, along with all of its subtasks.
    /// Returns whether a task was actually removed.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        let removed = self.tasks.len() != len_before;
        if removed {
            self.deleted_tasks.insert(Utc::now(), *id);
        }
        removed
    }

    /// The full, unfiltered set of tasks, in store order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a particular task
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// The ids of tasks deleted at or after `since`
    pub fn deleted_since(&self, since: DateTime<Utc>) -> Vec<TaskId> {
        self.deleted_tasks.range(since..)
            .map(|(_instant, id)| *id)
            .collect()
    }

    /// Append a subtask to the task with this id, preserving insertion order.
    /// Returns `None` when no such task exists.
    pub fn add_subtask(&mut self, task_id: &TaskId, input: SubtaskInput) -> Option<&Subtask> {
        let task = self.get_mut(task_id)?;
        Some(task.add_subtask(input))
    }

    /// Flip the completion flag of one subtask. The parent task's own flag is
    /// never touched. A no-op when either id is unknown.
    pub fn set_subtask_completed(&mut self, task_id: &TaskId, subtask_id: &SubtaskId, completed: bool) {
        match self.get_mut(task_id) {
            Some(task) => {
                if task.set_subtask_completed(subtask_id, completed) == false {
                    log::warn!("Ignoring completion toggle for unknown subtask {} of task {}", subtask_id, task_id);
                }
            },
            None => {
                log::warn!("Ignoring completion toggle for subtask of unknown task {}", task_id);
            },
        }
    }

    /// Remove one subtask from its parent's list. A no-op when either id is unknown.
    pub fn remove_subtask(&mut self, task_id: &TaskId, subtask_id: &SubtaskId) {
        match self.get_mut(task_id) {
            Some(task) => {
                if task.remove_subtask(subtask_id) == false {
                    log::warn!("Ignoring removal of unknown subtask {} of task {}", subtask_id, task_id);
                }
            },
            None => {
                log::warn!("Ignoring subtask removal for unknown task {}", task_id);
            },
        }
    }

    /// Completed/total/percent over the subtasks of the task with this id.
    /// Returns `None` when no such task exists.
    pub fn progress(&self, task_id: &TaskId) -> Option<Progress> {
        self.get(task_id).map(|t| t.progress())
    }

    /// Insert a task that already has an id, e.g. one loaded back from a repository
    pub(crate) fn insert_existing(&mut self, task: Task) {
        self.tasks.push(task);
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input(title: &str) -> TaskInput {
        TaskInput::new(title, Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap())
    }

    #[test]
    fn created_tasks_show_up_in_list_exactly_once() {
        let mut store = TaskStore::new();
        let id = *store.create(input("Prepare the quarterly review")).id();

        let matching: Vec<_> = store.list().iter().filter(|t| t.id() == &id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title(), "Prepare the quarterly review");
        assert_eq!(matching[0].completed(), false);
    }

    #[test]
    fn list_preserves_creation_order() {
        let mut store = TaskStore::new();
        store.create(input("first"));
        store.create(input("second"));
        store.create(input("third"));

        let titles: Vec<_> = store.list().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn update_of_unknown_id_is_a_sentinel_not_a_panic() {
        let mut store = TaskStore::new();
        let ghost = TaskId::random();

        assert!(store.update(&ghost, TaskPatch::default()).is_none());
        assert!(store.set_completed(&ghost, true).is_none());
        assert_eq!(store.delete(&ghost), false);
        assert!(store.progress(&ghost).is_none());
    }

    #[test]
    fn delete_cascades_and_second_delete_returns_false() {
        let mut store = TaskStore::new();
        let id = *store.create(input("Send contract")).id();
        store.add_subtask(&id, SubtaskInput::new("print it")).unwrap();
        store.add_subtask(&id, SubtaskInput::new("sign it")).unwrap();

        assert_eq!(store.delete(&id), true);
        assert!(store.get(&id).is_none());
        assert!(store.list().is_empty());
        assert_eq!(store.delete(&id), false);
    }

    #[test]
    fn deleted_ids_are_kept_for_mirroring() {
        let mut store = TaskStore::new();
        let before = Utc::now();
        let id = *store.create(input("temp")).id();
        store.delete(&id);

        assert_eq!(store.deleted_since(before), vec![id]);
        assert!(store.deleted_since(Utc::now() + chrono::Duration::seconds(1)).is_empty());
    }

    #[test]
    fn subtask_lifecycle_and_progress() {
        let mut store = TaskStore::new();
        let task_id = *store.create(input("Onboard new supplier")).id();

        // a task with no subtasks reports 0%
        assert_eq!(store.progress(&task_id).unwrap(), Progress { completed: 0, total: 0, percent: 0 });

        let first = *store.add_subtask(&task_id, SubtaskInput::new("collect tax id")).unwrap().id();
        store.set_subtask_completed(&task_id, &first, true);
        assert_eq!(store.progress(&task_id).unwrap(), Progress { completed: 1, total: 1, percent: 100 });

        let second = *store.add_subtask(&task_id, SubtaskInput::new("register in ERP")).unwrap().id();
        assert_eq!(store.progress(&task_id).unwrap(), Progress { completed: 1, total: 2, percent: 50 });

        store.remove_subtask(&task_id, &second);
        assert_eq!(store.progress(&task_id).unwrap().total, 1);

        // unknown ids are ignored, not errors
        store.set_subtask_completed(&task_id, &second, true);
        store.remove_subtask(&TaskId::random(), &first);
        assert_eq!(store.progress(&task_id).unwrap().total, 1);
    }

    #[test]
    fn toggling_a_subtask_leaves_the_parent_flag_alone() {
        let mut store = TaskStore::new();
        let task_id = *store.create(input("Review proposal")).id();
        let subtask_id = *store.add_subtask(&task_id, SubtaskInput::new("read appendix")).unwrap().id();

        store.set_subtask_completed(&task_id, &subtask_id, true);
        assert_eq!(store.get(&task_id).unwrap().completed(), false);
    }
}

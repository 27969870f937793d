//! Checklist items nested under a task

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::TaskId;

/// The identifier of a [`Subtask`], serialized as the plain uuid string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtaskId {
    content: Uuid,
}
impl SubtaskId {
    /// Generate a random SubtaskId
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}
impl Display for SubtaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}
impl FromStr for SubtaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u: Uuid = s.parse()?;
        Ok(Self { content: u })
    }
}

/// The caller-supplied fields of a subtask
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubtaskInput {
    pub title: String,
    pub description: Option<String>,
    /// The optional target instant for this checklist item
    pub due: Option<DateTime<Utc>>,
}

impl SubtaskInput {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            description: None,
            due: None,
        }
    }
}

/// A checklist item, owned by exactly one task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    id: SubtaskId,
    /// The owning task. A relation only: the parent's subtask list is what owns this value
    task_id: TaskId,
    title: String,
    description: Option<String>,
    due: Option<DateTime<Utc>>,
    /// Independent from the parent task's own `completed` flag
    completed: bool,
}

impl Subtask {
    pub(crate) fn new(task_id: TaskId, input: SubtaskInput) -> Self {
        Self {
            id: SubtaskId::random(),
            task_id,
            title: input.title,
            description: input.description,
            due: input.due,
            completed: false,
        }
    }

    pub fn id(&self) -> &SubtaskId { &self.id }
    pub fn task_id(&self) -> &TaskId { &self.task_id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn due(&self) -> Option<&DateTime<Utc>> { self.due.as_ref() }
    pub fn completed(&self) -> bool { self.completed }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// A derived read over a task's subtasks, for progress display (e.g. "2/5 — 40%")
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, or 0 when there are no subtasks
    pub percent: u8,
}

impl Progress {
    pub(crate) fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (completed as f64 * 100.0 / total as f64).round() as u8
        };
        Self { completed, total, percent }
    }
}

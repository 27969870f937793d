//! Schedulable tasks, the unit of work everything else revolves around

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::agent::AgentId;
use crate::subtask::{Progress, Subtask, SubtaskId, SubtaskInput};

/// The identifier of a [`Task`], unique within a store for the lifetime of the process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    content: Uuid,
}
impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}
impl FromStr for TaskId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u: Uuid = s.parse()?;
        Ok(Self { content: u })
    }
}

/// Serialized as the plain uuid string, so TaskIds can key JSON maps
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content.to_hyphenated().to_string())
    }
}
/// Serialized as the plain uuid string, so TaskIds can key JSON maps
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let u = Uuid::deserialize(deserializer)?;
        Ok(TaskId { content: u })
    }
}

/// How urgent a task is. Drives a fixed display color, see [`crate::view::priority_color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// What kind of work a task is. Drives a fixed display color, see [`crate::view::category_color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Meeting,
    Delivery,
    FollowUp,
    Other,
}

/// The caller-supplied fields of a task.
///
/// Validation (e.g. a non-empty title) is the responsibility of the boundary
/// that builds this input; the store trusts it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    /// The start instant. For all-day tasks the time-of-day part is kept but ignored for display
    pub start: DateTime<Utc>,
    /// The optional end instant. An end earlier than `start` is stored as-is, not rejected
    pub end: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub completed: bool,
    pub priority: Priority,
    pub category: Category,
    pub agents: HashSet<AgentId>,
}

impl TaskInput {
    /// A minimal input: every field not given here starts out empty/false/Medium/Other
    pub fn new<S: Into<String>>(title: S, start: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end: None,
            all_day: false,
            completed: false,
            priority: Priority::Medium,
            category: Category::Other,
            agents: HashSet::new(),
        }
    }
}

/// A partial update to a task: only the fields that are `Some` are applied.
///
/// `description` and `end` are doubly-wrapped so that `Some(None)` clears them
/// while `None` leaves them untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<Option<DateTime<Utc>>>,
    pub all_day: Option<bool>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub agents: Option<HashSet<AgentId>>,
}

/// A schedulable task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned at creation, immutable afterwards
    id: TaskId,

    title: String,
    description: Option<String>,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    all_day: bool,
    /// The task's own completion flag. Independent from its subtasks' flags: no roll-up in either direction
    completed: bool,
    priority: Priority,
    category: Category,
    /// The ids of the agents this task is assigned to. Membership is what matters, not order
    agents: HashSet<AgentId>,

    /// Owned checklist, in insertion order. Deleting the task deletes these too
    subtasks: Vec<Subtask>,

    /// The time this task was created
    created: DateTime<Utc>,
    /// The last time this task was modified
    last_modified: DateTime<Utc>,
}

impl Task {
    /// Create a brand new Task. This will pick a new (random) task id.
    pub fn new(input: TaskInput) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::random(),
            title: input.title,
            description: input.description,
            start: input.start,
            end: input.end,
            all_day: input.all_day,
            completed: input.completed,
            priority: input.priority,
            category: input.category,
            agents: input.agents,
            subtasks: Vec::new(),
            created: now,
            last_modified: now,
        }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn start(&self) -> &DateTime<Utc> { &self.start }
    pub fn end(&self) -> Option<&DateTime<Utc>> { self.end.as_ref() }
    pub fn all_day(&self) -> bool { self.all_day }
    pub fn completed(&self) -> bool { self.completed }
    pub fn priority(&self) -> Priority { self.priority }
    pub fn category(&self) -> Category { self.category }
    pub fn agents(&self) -> &HashSet<AgentId> { &self.agents }
    pub fn subtasks(&self) -> &[Subtask] { &self.subtasks }
    pub fn created(&self) -> &DateTime<Utc> { &self.created }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    /// Whether this task starts on the given calendar day (time-of-day ignored)
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start.date_naive() == day
    }

    /// Set the completion flag.
    /// This updates the "last modified" field
    pub fn set_completed(&mut self, completed: bool) {
        self.update_last_modified();
        self.completed = completed;
    }

    /// Merge a partial update onto this task. Fields absent from the patch are left unchanged.
    pub fn apply(&mut self, patch: TaskPatch) {
        self.update_last_modified();
        if let Some(title) = patch.title { self.title = title; }
        if let Some(description) = patch.description { self.description = description; }
        if let Some(start) = patch.start { self.start = start; }
        if let Some(end) = patch.end { self.end = end; }
        if let Some(all_day) = patch.all_day { self.all_day = all_day; }
        if let Some(completed) = patch.completed { self.completed = completed; }
        if let Some(priority) = patch.priority { self.priority = priority; }
        if let Some(category) = patch.category { self.category = category; }
        if let Some(agents) = patch.agents { self.agents = agents; }
    }

    /// Completed/total counts over this task's subtasks
    pub fn progress(&self) -> Progress {
        let total = self.subtasks.len();
        let completed = self.subtasks.iter().filter(|s| s.completed()).count();
        Progress::new(completed, total)
    }

    pub(crate) fn add_subtask(&mut self, input: SubtaskInput) -> &Subtask {
        self.update_last_modified();
        self.subtasks.push(Subtask::new(self.id, input));
        self.subtasks.last().unwrap(/* cannot panic, we have just pushed an element */)
    }

    /// Returns whether a subtask with this id was found
    pub(crate) fn set_subtask_completed(&mut self, id: &SubtaskId, completed: bool) -> bool {
        match self.subtasks.iter_mut().find(|s| s.id() == id) {
            Some(subtask) => {
                subtask.set_completed(completed);
                self.update_last_modified();
                true
            },
            None => false,
        }
    }

    /// Returns whether a subtask with this id was found
    pub(crate) fn remove_subtask(&mut self, id: &SubtaskId) -> bool {
        let len_before = self.subtasks.len();
        self.subtasks.retain(|s| s.id() != id);
        let removed = self.subtasks.len() != len_before;
        if removed {
            self.update_last_modified();
        }
        removed
    }

    fn update_last_modified(&mut self) {
        self.last_modified = Utc::now();
    }
}

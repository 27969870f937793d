//! This crate provides the engine behind a calendar/task screen: an in-memory
//! task store, subtask checklists, assignees, multi-criteria filtering, and
//! the pure date-window math behind week and month views.
//!
//! The [`TaskStore`](store::TaskStore) is the source of truth. Every change to
//! it (or to the [`FilterCriteria`](filter::FilterCriteria)) is followed by
//! recomputing the derived views: [`filter`] narrows the task list,
//! [`window`] produces the calendar grid for the current anchor date, and
//! [`view`] joins the two into display-ready day cells or a sorted flat list.
//!
//! Durable storage is a collaborator, not a concern of the engine: implement
//! [`TaskRepository`](traits::TaskRepository) for your backend and push the
//! store into it with [`sync::mirror`]. A JSON-file implementation is provided
//! in the [`cache`] module.

pub mod traits;

mod task;
pub use task::{Category, Priority, Task, TaskId, TaskInput, TaskPatch};
mod subtask;
pub use subtask::{Progress, Subtask, SubtaskId, SubtaskInput};
mod agent;
pub use agent::{Agent, AgentId};

pub mod store;
pub use store::TaskStore;
pub mod filter;
pub use filter::{CategorySet, FilterCriteria, StatusFilter};
pub mod window;
pub mod view;

pub mod board;
pub mod cache;
pub mod sync;
pub mod ical;

pub mod config;

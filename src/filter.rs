//! Narrowing the task list by text, assignees, completion state, and category
//!
//! Every criterion is AND-combined, and an empty criterion is a disabled one:
//! with nothing selected anywhere, filtering is the identity. Filtering only
//! ever produces a derived view; it never mutates or reorders the input.

use std::collections::HashSet;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::task::{Category, Task};

bitflags! {
    /// A selection of task categories
    #[derive(Serialize, Deserialize)]
    pub struct CategorySet: u8 {
        const MEETING   = 1;
        const DELIVERY  = 2;
        const FOLLOW_UP = 4;
        const OTHER     = 8;
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        match category {
            Category::Meeting => CategorySet::MEETING,
            Category::Delivery => CategorySet::DELIVERY,
            Category::FollowUp => CategorySet::FOLLOW_UP,
            Category::Other => CategorySet::OTHER,
        }
    }
}

/// Which completion states pass the filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Pass everything
    All,
    /// Keep only completed tasks
    Completed,
    /// Keep only tasks still to do
    Pending,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// The combined filter criteria, as driven by the search box and filter chips
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title or description.
    /// Blank or whitespace-only text disables the criterion.
    pub text: String,
    /// Tasks pass when assigned to at least one selected agent.
    /// An empty selection disables the criterion.
    pub agents: HashSet<AgentId>,
    pub status: StatusFilter,
    /// Tasks pass when their category is selected.
    /// An empty selection disables the criterion.
    pub categories: CategorySet,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            text: String::new(),
            agents: HashSet::new(),
            status: StatusFilter::default(),
            categories: CategorySet::empty(),
        }
    }
}

impl FilterCriteria {
    fn matches(&self, task: &Task) -> bool {
        let text = self.text.trim();
        if text.is_empty() == false {
            let needle = text.to_lowercase();
            let in_title = task.title().to_lowercase().contains(&needle);
            let in_description = task.description()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if in_title == false && in_description == false {
                return false;
            }
        }

        if self.agents.is_empty() == false {
            if task.agents().is_disjoint(&self.agents) {
                return false;
            }
        }

        match self.status {
            StatusFilter::All => (),
            StatusFilter::Completed => if task.completed() == false { return false; },
            StatusFilter::Pending => if task.completed() { return false; },
        }

        if self.categories.is_empty() == false {
            if self.categories.contains(CategorySet::from(task.category())) == false {
                return false;
            }
        }

        true
    }
}

/// The tasks passing every enabled criterion, in their original order
pub fn filter_tasks<'t>(tasks: &'t [Task], criteria: &FilterCriteria) -> Vec<&'t Task> {
    tasks.iter()
        .filter(|t| criteria.matches(t))
        .collect()
}

//! Exporting tasks as iCal `VTODO` items
//!
//! Each subtask becomes its own `VTODO`, related to its parent through
//! `RELATED-TO`, which is how checklist items travel in iCal.

use std::error::Error;

use chrono::{DateTime, Utc};
use ics::properties::{Categories, Description, DtStart, Due, LastModified, Priority, RelatedTo, Status, Summary};
use ics::{ICalendar, ToDo};

use crate::config::{ORG_NAME, PRODUCT_NAME};
use crate::task::Task;

/// The PROD-ID written into exported calendars.
/// Built from the [`crate::config`] statics, which callers may override.
pub fn default_prod_id() -> String {
    format!("-//{}//{}//EN",
        ORG_NAME.lock().unwrap(),
        PRODUCT_NAME.lock().unwrap())
}

/// Create an iCal document holding this task and its subtasks
pub fn build_from(task: &Task) -> Result<String, Box<dyn Error>> {
    let s_last_modified = format_date_time(task.last_modified());
    let parent_uid = task.id().to_string();

    let mut todo = ToDo::new(parent_uid.clone(), s_last_modified.clone());
    todo.push(LastModified::new(s_last_modified.clone()));
    todo.push(Summary::new(task.title()));
    if let Some(description) = task.description() {
        todo.push(Description::new(description));
    }
    todo.push(DtStart::new(format_date_time(task.start())));
    if let Some(end) = task.end() {
        todo.push(Due::new(format_date_time(end)));
    }
    todo.push(Priority::new(ical_priority(task.priority())));
    todo.push(Categories::new(ical_category(task.category())));
    todo.push(completion_status(task.completed()));

    let mut calendar = ICalendar::new("2.0", default_prod_id());
    calendar.add_todo(todo);

    for subtask in task.subtasks() {
        let mut child = ToDo::new(subtask.id().to_string(), s_last_modified.clone());
        child.push(RelatedTo::new(parent_uid.clone()));
        child.push(Summary::new(subtask.title()));
        if let Some(due) = subtask.due() {
            child.push(Due::new(format_date_time(due)));
        }
        child.push(completion_status(subtask.completed()));
        calendar.add_todo(child);
    }

    Ok(calendar.to_string())
}

fn completion_status<'a>(completed: bool) -> Status<'a> {
    if completed { Status::completed() } else { Status::needs_action() }
}

/// iCal priorities go from 1 (highest) to 9 (lowest)
fn ical_priority(priority: crate::task::Priority) -> &'static str {
    match priority {
        crate::task::Priority::High => "1",
        crate::task::Priority::Medium => "5",
        crate::task::Priority::Low => "9",
    }
}

fn ical_category(category: crate::task::Category) -> &'static str {
    match category {
        crate::task::Category::Meeting => "MEETING",
        crate::task::Category::Delivery => "DELIVERY",
        crate::task::Category::FollowUp => "FOLLOW-UP",
        crate::task::Category::Other => "OTHER",
    }
}

fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

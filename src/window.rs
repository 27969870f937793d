//! Pure calendar-window computation: the day grids behind the week and month views
//!
//! Everything here is a function of its arguments only. Weeks are ISO weeks:
//! they start on Monday.

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which granularity the calendar is being looked at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Week,
    Month,
}

/// The Monday on or before the given day
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// The 7 consecutive days of the ISO week containing `anchor`
pub fn week_window(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start(anchor);
    let mut days = [monday; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = monday + Duration::days(offset as i64);
    }
    days
}

/// The full grid of complete weeks covering `anchor`'s month: from the Monday
/// on/before the 1st through the Sunday on/after the month's last day
pub fn month_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first_of_month = anchor.with_day(1)
        .unwrap(/* cannot panic, every month has a day 1 */);
    let last_of_month = first_of_month + Months::new(1) - Duration::days(1);

    let start = week_start(first_of_month);
    let end = last_of_month + Duration::days(6 - last_of_month.weekday().num_days_from_monday() as i64);

    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        days.push(day);
        day += Duration::days(1);
    }
    days
}

/// The tasks of the given collection that start on the given calendar day
/// (time-of-day ignored), keeping the collection's order
pub fn day_tasks<'t>(tasks: &[&'t Task], day: NaiveDate) -> Vec<&'t Task> {
    tasks.iter()
        .filter(|t| t.starts_on(day))
        .copied()
        .collect()
}

/// Today's calendar day, the anchor the "today" navigation button resets to
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The anchor one step forward: 7 days in week view, one calendar month otherwise
pub fn next_anchor(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => anchor + Duration::days(7),
        ViewMode::Month => anchor + Months::new(1),
    }
}

/// The anchor one step back: 7 days in week view, one calendar month otherwise
pub fn previous_anchor(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => anchor - Duration::days(7),
        ViewMode::Month => anchor - Months::new(1),
    }
}

//! Display-ready groupings of tasks: day cells for the grids, a sorted flat
//! list, and the fixed color palettes shared by every view

use chrono::NaiveDate;
use csscolorparser::Color;
use once_cell::sync::Lazy;

use crate::task::{Category, Priority, Task};
use crate::window;

/// Month cells only display this many tasks; the rest collapse into "+N more"
const MONTH_CELL_CAP: usize = 3;

/// One day of a week or month grid, holding the tasks to actually display
#[derive(Clone, Debug)]
pub struct DayCell<'t> {
    pub day: NaiveDate,
    /// The tasks starting that day, capped in month view
    pub tasks: Vec<&'t Task>,
    /// How many further tasks were hidden by the cap ("+N more")
    pub hidden: usize,
}

/// The 7 cells of the week view. Week cells show all of their tasks.
pub fn week_cells<'t>(tasks: &[&'t Task], anchor: NaiveDate) -> Vec<DayCell<'t>> {
    window::week_window(anchor).iter()
        .map(|day| DayCell {
            day: *day,
            tasks: window::day_tasks(tasks, *day),
            hidden: 0,
        })
        .collect()
}

/// The cells of the month grid, each capped at 3 displayed tasks
pub fn month_cells<'t>(tasks: &[&'t Task], anchor: NaiveDate) -> Vec<DayCell<'t>> {
    window::month_window(anchor).iter()
        .map(|day| {
            let mut day_tasks = window::day_tasks(tasks, *day);
            let hidden = day_tasks.len().saturating_sub(MONTH_CELL_CAP);
            day_tasks.truncate(MONTH_CELL_CAP);
            DayCell {
                day: *day,
                tasks: day_tasks,
                hidden,
            }
        })
        .collect()
}

/// The flat list view: every task, ascending by start instant.
/// The sort is stable, so tasks starting at the same instant keep their store order.
pub fn sorted_by_start<'t>(tasks: &[&'t Task]) -> Vec<&'t Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| *t.start());
    sorted
}

static MEETING_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#3b82f6"));
static DELIVERY_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#22c55e"));
static FOLLOW_UP_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#f59e0b"));
static OTHER_CATEGORY_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#64748b"));

static HIGH_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#ef4444"));
static MEDIUM_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#eab308"));
static LOW_COLOR: Lazy<Color> = Lazy::new(|| parse_palette_color("#10b981"));

fn parse_palette_color(css: &str) -> Color {
    csscolorparser::parse(css).unwrap(/* cannot panic, the palette literals are valid CSS colors */)
}

/// The fixed color a category is rendered with, identical in every view
pub fn category_color(category: Category) -> &'static Color {
    match category {
        Category::Meeting => &MEETING_COLOR,
        Category::Delivery => &DELIVERY_COLOR,
        Category::FollowUp => &FOLLOW_UP_COLOR,
        Category::Other => &OTHER_CATEGORY_COLOR,
    }
}

/// The fixed color a priority is rendered with, identical in every view
pub fn priority_color(priority: Priority) -> &'static Color {
    match priority {
        Priority::High => &HIGH_COLOR,
        Priority::Medium => &MEDIUM_COLOR,
        Priority::Low => &LOW_COLOR,
    }
}

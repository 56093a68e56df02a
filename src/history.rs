use chrono::{Local, NaiveDate};

use crate::models::{PerformedSet, SessionItem};

/// Today's calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `10@60` for a weighted set, `10` for a bodyweight one.
pub fn format_set(set: &PerformedSet) -> String {
    if set.weight > 0.0 {
        format!("{}@{}", set.reps, set.weight)
    } else {
        set.reps.to_string()
    }
}

/// One history line for an item, e.g. `Bench: 10@60, 8@62.5`.
pub fn summarize_item(item: &SessionItem) -> String {
    let sets = if item.performed_sets.is_empty() {
        "—".to_string()
    } else {
        item.performed_sets
            .iter()
            .map(format_set)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}: {}", item.exercise_name, sets)
}

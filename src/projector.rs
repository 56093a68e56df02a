use std::sync::Arc;

use chrono::NaiveDate;

use crate::history::today;
use crate::models::{SessionItem, WorkoutTemplate};

/// A session being logged locally, not yet seen by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    pub date_str: NaiveDate,
    pub workout_title: String,
    pub notes: String,
    pub items: Vec<Arc<SessionItem>>,
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self::on(today())
    }
}

impl SessionDraft {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date_str: date,
            workout_title: String::new(),
            notes: String::new(),
            items: Vec::new(),
        }
    }
}

/// Builds a fresh session skeleton from a template: one item per template
/// item, in order, with targets copied and no sets logged.
pub fn project(template: &WorkoutTemplate, date: NaiveDate) -> SessionDraft {
    let items = template
        .items
        .iter()
        .map(|item| {
            Arc::new(SessionItem {
                exercise_name: item.exercise_name.clone(),
                target_sets: item.sets,
                target_reps: item.reps,
                performed_sets: Vec::new(),
            })
        })
        .collect();

    SessionDraft {
        date_str: date,
        workout_title: template.title.clone(),
        notes: String::new(),
        items,
    }
}

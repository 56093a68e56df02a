// Every edit returns a new list; untouched items keep their `Arc`.

use std::sync::Arc;

use crate::models::{PerformedSet, SessionItem};

const FALLBACK_REPS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetField {
    Weight(f64),
    Reps(u32),
    Rpe(Option<f64>),
}

/// Appends a set to `items[item_index]`, numbered after the existing ones
/// and pre-filled with the target reps (10 when no target is set).
pub fn add_set(items: &[Arc<SessionItem>], item_index: usize) -> Vec<Arc<SessionItem>> {
    let mut next = items.to_vec();
    let Some(item) = next.get_mut(item_index) else {
        return next;
    };

    let set_number = item.performed_sets.len() as u32 + 1;
    let reps = if item.target_reps > 0 {
        item.target_reps
    } else {
        FALLBACK_REPS
    };
    let mut updated = (**item).clone();
    updated.performed_sets.push(PerformedSet {
        set_number,
        weight: 0.0,
        reps,
        rpe: None,
    });
    *item = Arc::new(updated);
    next
}

/// Replaces one field of one set. Out-of-range indices leave the list as it
/// was.
pub fn update_set(
    items: &[Arc<SessionItem>],
    item_index: usize,
    set_index: usize,
    field: SetField,
) -> Vec<Arc<SessionItem>> {
    let mut next = items.to_vec();
    let Some(item) = next.get_mut(item_index) else {
        return next;
    };
    if set_index >= item.performed_sets.len() {
        return next;
    }

    let mut updated = (**item).clone();
    let set = &mut updated.performed_sets[set_index];
    match field {
        SetField::Weight(weight) => set.weight = weight.max(0.0),
        SetField::Reps(reps) => set.reps = reps.max(1),
        SetField::Rpe(rpe) => set.rpe = rpe.map(|v| v.clamp(1.0, 10.0)),
    }
    *item = Arc::new(updated);
    next
}

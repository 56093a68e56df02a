use tracing::info;

use crate::api::{RemoteApi, Transport};
use crate::error::{Fault, ValidationError};
use crate::models::{non_blank, Exercise, NewExercise, NewWorkoutTemplate, WorkoutItem, WorkoutTemplate};

/// Appends a new item to a copy of `items`. A blank exercise name leaves the
/// list as it was.
pub fn add_item(
    items: &[WorkoutItem],
    exercise_name: &str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
) -> Vec<WorkoutItem> {
    let mut next = items.to_vec();
    if let Some(name) = non_blank(exercise_name) {
        next.push(WorkoutItem {
            exercise_name: name.to_string(),
            sets: sets.max(1),
            reps: reps.max(1),
            rest_seconds,
        });
    }
    next
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateComposer {
    pub title: String,
    pub description: String,
    pub items: Vec<WorkoutItem>,
    pub pending_name: String,
    pub pending_sets: u32,
    pub pending_reps: u32,
    pub pending_rest: u32,
}

impl Default for TemplateComposer {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            items: Vec::new(),
            pending_name: String::new(),
            pending_sets: 3,
            pending_reps: 10,
            pending_rest: 90,
        }
    }
}

impl TemplateComposer {
    /// Moves the pending inputs into the draft list. Returns false when the
    /// pending name is blank.
    pub fn add_pending(&mut self) -> bool {
        let before = self.items.len();
        self.items = add_item(
            &self.items,
            &self.pending_name,
            self.pending_sets,
            self.pending_reps,
            self.pending_rest,
        );
        let added = self.items.len() > before;
        if added {
            self.pending_name.clear();
        }
        added
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if non_blank(&self.title).is_none() {
            return Err(ValidationError::EmptyTemplateTitle);
        }
        if self.items.is_empty() {
            return Err(ValidationError::EmptyTemplateItems);
        }
        Ok(())
    }

    pub fn submit<T: Transport>(&mut self, api: &RemoteApi<T>) -> Result<WorkoutTemplate, Fault> {
        self.validate()?;
        let created = api.create_template(&NewWorkoutTemplate {
            title: self.title.trim(),
            description: non_blank(&self.description),
            items: &self.items,
        })?;
        info!(id = %created.id, items = created.items.len(), "workout template created");

        self.title.clear();
        self.description.clear();
        self.items.clear();
        Ok(created)
    }
}

/// Library form for a new exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseForm {
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    pub notes: String,
}

impl ExerciseForm {
    pub fn to_payload(&self) -> Result<NewExercise, ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::EmptyExerciseName)?;
        Ok(NewExercise {
            name: name.to_string(),
            muscle_group: non_blank(&self.muscle_group).map(str::to_string),
            equipment: non_blank(&self.equipment).map(str::to_string),
            notes: non_blank(&self.notes).map(str::to_string),
        })
    }

    pub fn submit<T: Transport>(&mut self, api: &RemoteApi<T>) -> Result<Exercise, Fault> {
        let payload = self.to_payload()?;
        let created = api.create_exercise(&payload)?;
        info!(id = %created.id, name = %created.name, "exercise created");
        *self = Self::default();
        Ok(created)
    }
}

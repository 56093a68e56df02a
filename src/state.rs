//! The tracker's whole screen state in one place.

use chrono::NaiveDate;

use crate::api::{RemoteApi, Transport};
use crate::composer::{ExerciseForm, TemplateComposer};
use crate::editor::{self, SetField};
use crate::error::Fault;
use crate::history::today;
use crate::models::{Exercise, Session, WorkoutTemplate};
use crate::persister;
use crate::projector::{self, SessionDraft};
use crate::store::{EntityStores, RefreshReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Plan,
    Log,
    History,
    Library,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Plan, Tab::Log, Tab::History, Tab::Library];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Plan => "Workout Planner",
            Tab::Log => "Log Session",
            Tab::History => "History",
            Tab::Library => "Exercise Library",
        }
    }
}

/// A created entity together with the refresh that followed it.
#[derive(Debug)]
pub struct Saved<E> {
    pub entity: E,
    pub refresh: RefreshReport,
}

pub struct AppState<T> {
    api: RemoteApi<T>,
    pub tab: Tab,
    pub stores: EntityStores,
    pub exercise_form: ExerciseForm,
    pub composer: TemplateComposer,
    pub draft: SessionDraft,
    pub history_date: NaiveDate,
}

impl<T: Transport> AppState<T> {
    pub fn new(api: RemoteApi<T>) -> Self {
        let day = today();
        Self {
            api,
            tab: Tab::default(),
            stores: EntityStores::new(),
            exercise_form: ExerciseForm::default(),
            composer: TemplateComposer::default(),
            draft: SessionDraft::on(day),
            history_date: day,
        }
    }

    pub fn api(&self) -> &RemoteApi<T> {
        &self.api
    }

    pub fn refresh_all(&mut self) -> RefreshReport {
        self.stores.refresh_all(&self.api)
    }

    pub fn add_exercise(&mut self) -> Result<Saved<Exercise>, Fault> {
        let entity = self.exercise_form.submit(&self.api)?;
        let refresh = self.refresh_all();
        Ok(Saved { entity, refresh })
    }

    pub fn add_workout_item(&mut self) -> bool {
        self.composer.add_pending()
    }

    pub fn remove_workout_item(&mut self, index: usize) {
        self.composer.remove_item(index);
    }

    pub fn create_workout(&mut self) -> Result<Saved<WorkoutTemplate>, Fault> {
        let entity = self.composer.submit(&self.api)?;
        let refresh = self.refresh_all();
        Ok(Saved { entity, refresh })
    }

    pub fn use_template(&mut self, index: usize) -> bool {
        let Some(template) = self.stores.templates.get(index) else {
            return false;
        };
        self.draft = projector::project(template, self.draft.date_str);
        self.tab = Tab::Log;
        true
    }

    pub fn add_performed_set(&mut self, item_index: usize) {
        self.draft.items = editor::add_set(&self.draft.items, item_index);
    }

    pub fn update_performed_set(&mut self, item_index: usize, set_index: usize, field: SetField) {
        self.draft.items = editor::update_set(&self.draft.items, item_index, set_index, field);
    }

    pub fn log_session(&mut self) -> Result<Saved<Session>, Fault> {
        let entity = persister::commit(&mut self.draft, &self.api)?;
        let refresh = self.refresh_all();
        self.tab = Tab::History;
        Ok(Saved { entity, refresh })
    }

    pub fn filter_history(&mut self) -> Result<(), Fault> {
        self.stores.filter_sessions(&self.api, self.history_date)?;
        Ok(())
    }
}

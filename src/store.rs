use std::thread;

use chrono::NaiveDate;
use tracing::warn;

use crate::api::{RemoteApi, Transport};
use crate::error::TransportError;
use crate::models::{Exercise, Session, WorkoutTemplate};

#[derive(Debug)]
pub struct Snapshot {
    pub exercises: Result<Vec<Exercise>, TransportError>,
    pub templates: Result<Vec<WorkoutTemplate>, TransportError>,
    pub sessions: Result<Vec<Session>, TransportError>,
}

impl Snapshot {
    pub fn fetch<T: Transport>(api: &RemoteApi<T>) -> Self {
        thread::scope(|scope| {
            let exercises = scope.spawn(|| api.list_exercises());
            let templates = scope.spawn(|| api.list_templates());
            let sessions = api.list_sessions(None);
            Snapshot {
                exercises: join_read(exercises),
                templates: join_read(templates),
                sessions,
            }
        })
    }
}

fn join_read<R>(
    handle: thread::ScopedJoinHandle<'_, Result<R, TransportError>>,
) -> Result<R, TransportError> {
    match handle.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Exercises,
    Templates,
    Sessions,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Exercises => "exercises",
            Collection::Templates => "workouts",
            Collection::Sessions => "sessions",
        }
    }
}

/// Which collections degraded to empty during a refresh.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub failures: Vec<(Collection, TransportError)>,
}

impl RefreshReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Status line text, `None` when every read succeeded.
    pub fn summary(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }
        let names: Vec<&str> = self.failures.iter().map(|(c, _)| c.name()).collect();
        Some(format!("Could not load {}", names.join(", ")))
    }
}

#[derive(Debug, Default, Clone)]
pub struct EntityStores {
    pub exercises: Vec<Exercise>,
    pub templates: Vec<WorkoutTemplate>,
    pub sessions: Vec<Session>,
}

impl EntityStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_all<T: Transport>(&mut self, api: &RemoteApi<T>) -> RefreshReport {
        self.apply(Snapshot::fetch(api))
    }

    // Failed reads become empty collections.
    pub fn apply(&mut self, snapshot: Snapshot) -> RefreshReport {
        let mut report = RefreshReport::default();
        self.exercises = or_empty(snapshot.exercises, Collection::Exercises, &mut report);
        self.templates = or_empty(snapshot.templates, Collection::Templates, &mut report);
        self.sessions = or_empty(snapshot.sessions, Collection::Sessions, &mut report);
        report
    }

    /// Replaces the sessions store with the server's list for `date`.
    pub fn filter_sessions<T: Transport>(
        &mut self,
        api: &RemoteApi<T>,
        date: NaiveDate,
    ) -> Result<(), TransportError> {
        self.sessions = api.list_sessions(Some(date))?;
        Ok(())
    }
}

fn or_empty<R>(
    result: Result<Vec<R>, TransportError>,
    collection: Collection,
    report: &mut RefreshReport,
) -> Vec<R> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(?collection, error = %err, "refresh read failed, showing empty collection");
            report.failures.push((collection, err));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;

    fn status(path: &str) -> TransportError {
        TransportError::Status {
            method: "GET",
            path: path.to_string(),
            status: 503,
        }
    }

    #[test]
    fn apply_replaces_contents_and_degrades_failures() {
        let mut stores = EntityStores::new();
        stores.templates.push(WorkoutTemplate {
            id: EntityId("old".into()),
            title: "Stale".into(),
            description: None,
            items: Vec::new(),
        });

        let report = stores.apply(Snapshot {
            exercises: Ok(vec![Exercise {
                id: EntityId("1".into()),
                name: "Squat".into(),
                muscle_group: None,
                equipment: None,
                notes: None,
            }]),
            templates: Ok(Vec::new()),
            sessions: Err(status("/api/sessions")),
        });

        assert_eq!(stores.exercises.len(), 1);
        assert!(stores.templates.is_empty());
        assert!(stores.sessions.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, Collection::Sessions);
        assert_eq!(report.summary().as_deref(), Some("Could not load sessions"));
        assert_eq!(RefreshReport::default().summary(), None);
    }
}

//! In-memory stand-in for the REST backend.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use fittrack::api::{ApiRequest, Method, Transport, EXERCISES_PATH, SESSIONS_PATH, WORKOUTS_PATH};
use fittrack::TransportError;
use serde_json::{json, Value};

#[derive(Default)]
pub struct FakeBackend {
    exercises: Mutex<Vec<Value>>,
    workouts: Mutex<Vec<Value>>,
    sessions: Mutex<Vec<Value>>,
    failing: Mutex<HashSet<&'static str>>,
    next_id: AtomicUsize,
    calls: Mutex<Vec<(Method, &'static str)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request to `path` answers 500 from now on.
    pub fn fail(&self, path: &'static str) {
        self.failing.lock().unwrap().insert(path);
    }

    pub fn recover(&self, path: &'static str) {
        self.failing.lock().unwrap().remove(path);
    }

    pub fn calls(&self) -> Vec<(Method, &'static str)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.calls().iter().filter(|(m, _)| *m == Method::Post).count()
    }

    pub fn seed(&self, path: &'static str, mut doc: Value) {
        doc["id"] = json!(self.assign_id());
        self.collection(path).lock().unwrap().push(doc);
    }

    fn assign_id(&self) -> String {
        format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn collection(&self, path: &str) -> &Mutex<Vec<Value>> {
        match path {
            EXERCISES_PATH => &self.exercises,
            WORKOUTS_PATH => &self.workouts,
            _ => &self.sessions,
        }
    }
}

impl Transport for FakeBackend {
    fn send(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push((request.method, request.path));
        if self.failing.lock().unwrap().contains(request.path) {
            return Err(TransportError::Status {
                method: request.method.as_str(),
                path: request.path.to_string(),
                status: 500,
            });
        }

        let collection = self.collection(request.path);
        match request.method {
            Method::Get => {
                let docs = collection.lock().unwrap();
                let date = request
                    .query
                    .iter()
                    .find(|(key, _)| *key == "date_str")
                    .map(|(_, value)| value.clone());
                let listed: Vec<Value> = docs
                    .iter()
                    .filter(|doc| match (&date, request.path) {
                        (Some(day), SESSIONS_PATH) => doc["date_str"] == json!(day),
                        _ => true,
                    })
                    .cloned()
                    .collect();
                Ok(Value::Array(listed))
            }
            Method::Post => {
                let mut doc = request.body.clone().unwrap_or_else(|| json!({}));
                doc["id"] = json!(self.assign_id());
                collection.lock().unwrap().push(doc.clone());
                Ok(doc)
            }
        }
    }
}

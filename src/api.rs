//api.rs

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TransportError;
use crate::models::{
    Exercise, NewExercise, NewSession, NewWorkoutTemplate, Session, WorkoutTemplate,
};

pub const EXERCISES_PATH: &str = "/api/exercises";
pub const WORKOUTS_PATH: &str = "/api/workouts";
pub const SESSIONS_PATH: &str = "/api/sessions";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: &'static str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }
}

pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<Value, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(&request.query)
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                method: request.method.as_str(),
                path: request.path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Value>()?)
    }
}

pub struct RemoteApi<T> {
    transport: T,
}

impl<T: Transport> RemoteApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_exercises(&self) -> Result<Vec<Exercise>, TransportError> {
        self.fetch(ApiRequest::get(EXERCISES_PATH))
    }

    pub fn create_exercise(&self, exercise: &NewExercise) -> Result<Exercise, TransportError> {
        self.create(EXERCISES_PATH, exercise)
    }

    pub fn list_templates(&self) -> Result<Vec<WorkoutTemplate>, TransportError> {
        self.fetch(ApiRequest::get(WORKOUTS_PATH))
    }

    pub fn create_template(
        &self,
        template: &NewWorkoutTemplate<'_>,
    ) -> Result<WorkoutTemplate, TransportError> {
        self.create(WORKOUTS_PATH, template)
    }

    /// Lists sessions, optionally restricted to one calendar day.
    pub fn list_sessions(&self, date: Option<NaiveDate>) -> Result<Vec<Session>, TransportError> {
        let request = ApiRequest::get(SESSIONS_PATH);
        let request = match date {
            Some(day) => request.with_query("date_str", day.format("%Y-%m-%d").to_string()),
            None => request,
        };
        self.fetch(request)
    }

    pub fn create_session(&self, session: &NewSession<'_>) -> Result<Session, TransportError> {
        self.create(SESSIONS_PATH, session)
    }

    fn create<B, R>(&self, path: &'static str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.fetch(ApiRequest::post(path, serde_json::to_value(body)?))
    }

    fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, TransportError> {
        debug!(method = request.method.as_str(), path = request.path, "remote call");
        let value = self.transport.send(&request)?;
        Ok(serde_json::from_value(value)?)
    }
}

//! Client-side workout tracker: exercises, workout templates and logged
//! sessions mirrored from a REST backend.

pub mod api;
pub mod composer;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod models;
pub mod persister;
pub mod projector;
pub mod state;
pub mod store;
pub mod ui;

pub use api::{HttpTransport, RemoteApi, Transport};
pub use config::Config;
pub use error::{Fault, TransportError, ValidationError};
pub use state::{AppState, Tab};

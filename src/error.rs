use thiserror::Error;

/// A local precondition failed; no request was sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("exercise name is required")]
    EmptyExerciseName,
    #[error("workout title is required")]
    EmptyTemplateTitle,
    #[error("workout needs at least one exercise")]
    EmptyTemplateItems,
    #[error("session title is required")]
    EmptyWorkoutTitle,
}

/// A remote call failed: network, non-2xx status, or an undecodable body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Fault {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Fault {
    pub fn is_validation(&self) -> bool {
        matches!(self, Fault::Validation(_))
    }
}

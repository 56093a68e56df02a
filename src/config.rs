use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Runtime configuration for the tracker window.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the REST API; paths like `/api/exercises` are appended to it.
    pub base_url: String,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            window_size: [1100.0, 760.0],
        }
    }
}

impl Config {
    /// Reads `FITTRACK_BACKEND_URL`, then `BACKEND_URL`, else the default.
    pub fn from_env() -> Self {
        let url = ["FITTRACK_BACKEND_URL", "BACKEND_URL"]
            .iter()
            .find_map(|key| env::var(key).ok());
        Self::with_backend(url.as_deref())
    }

    pub fn with_backend(url: Option<&str>) -> Self {
        let base_url = url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();
        Self {
            base_url,
            ..Self::default()
        }
    }
}

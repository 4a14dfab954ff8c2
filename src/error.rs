//! Error types for the epoch forge engine

use thiserror::Error;

/// Main error type for the epoch forge engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Player roster is empty")]
    EmptyRoster,

    #[error("Allowed pool is empty for setting: {0}")]
    EmptyPool(&'static str),

    #[error("Invalid epoch window: {0}")]
    InvalidEpochWindow(String),

    #[error("Map {map} requires epoch {required}, but the match may end at epoch {end}")]
    MapUnavailable { map: String, required: u8, end: u8 },

    #[error("Resolution integrity violation in fields: {}", .0.join(", "))]
    IntegrityViolation(Vec<String>),

    #[error("Player not found at index {0}")]
    PlayerNotFound(usize),

    #[error("Rerolls are locked under the Tournament preset")]
    RerollLocked,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl ForgeError {
    /// Errors caused by the match configuration itself rather than an engine defect
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ForgeError::EmptyRoster
                | ForgeError::EmptyPool(_)
                | ForgeError::InvalidEpochWindow(_)
                | ForgeError::MapUnavailable { .. }
        )
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        ForgeError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<ForgeError> for pyo3::PyErr {
    fn from(err: ForgeError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            ForgeError::PlayerNotFound(index) => {
                PyKeyError::new_err(format!("Player not found at index {}", index))
            }
            ForgeError::IntegrityViolation(_) | ForgeError::RerollLocked => {
                PyRuntimeError::new_err(err.to_string())
            }
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the epoch forge engine
pub type Result<T> = std::result::Result<T, ForgeError>;

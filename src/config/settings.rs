use crate::python::creator::DEFAULT_MAX_ATTEMPTS;
use crate::python::env::{DEFAULT_PYTHON, DEFAULT_VENV_NAME};

/// Resolved run settings: CLI flags with their environment fallbacks already
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub venv_name: String,
    pub python: String,
    pub assume_yes: bool,
    pub max_attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            venv_name: DEFAULT_VENV_NAME.to_string(),
            python: DEFAULT_PYTHON.to_string(),
            assume_yes: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

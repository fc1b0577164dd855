use crate::config::settings::Settings;
use crate::config::validation::validate_settings;
use crate::core::error::Result;
use crate::core::Platform;
use crate::python::EnvConfig;
use std::path::PathBuf;

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Session {
    pub platform: Platform,
    /// Raw OS identifier, shown to the user.
    pub os: String,
    pub work_dir: PathBuf,
    pub env: EnvConfig,
    pub assume_yes: bool,
    pub max_attempts: usize,
}

impl Session {
    pub fn new(settings: Settings, os: &str, work_dir: PathBuf, path: String) -> Result<Self> {
        validate_settings(&settings)?;

        Ok(Self {
            platform: Platform::from_os(os),
            os: os.to_string(),
            work_dir,
            env: EnvConfig::new(settings.venv_name, settings.python, path),
            assume_yes: settings.assume_yes,
            max_attempts: settings.max_attempts,
        })
    }

    /// Build a session for this process: its OS, working directory and `PATH`.
    pub fn from_current_process(settings: Settings) -> Result<Self> {
        let work_dir = std::env::current_dir()?;
        let path = std::env::var("PATH").unwrap_or_default();
        Self::new(settings, std::env::consts::OS, work_dir, path)
    }
}

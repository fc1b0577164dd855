use crate::config::settings::Settings;
use crate::core::error::{EmuError, Result};

pub fn validate_venv_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EmuError::Config("venv name cannot be empty".to_string()));
    }

    if name.starts_with('-') {
        return Err(EmuError::Config(
            "venv name cannot start with '-'".to_string(),
        ));
    }

    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(EmuError::Config(
            "venv name may not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_venv_name(&settings.venv_name)?;

    if settings.python.trim().is_empty() {
        return Err(EmuError::Config(
            "python interpreter cannot be empty".to_string(),
        ));
    }

    if settings.max_attempts == 0 {
        return Err(EmuError::Config(
            "max attempts must be > 0".to_string(),
        ));
    }

    Ok(())
}

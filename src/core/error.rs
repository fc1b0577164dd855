use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No virtual environment found under {0}")]
    EnvNotFound(PathBuf),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Permission denied while running {0}")]
    PermissionDenied(String),

    #[error("{command} exited with status {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Activation script {0} could not be executed after being written")]
    ActivationScriptMissing(PathBuf),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Exit by user command.")]
    Declined,

    #[error("No valid answer after {0} attempts")]
    PromptExhausted(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EmuError>;

pub mod creator;
pub mod env;
pub mod launcher;
pub mod locator;

pub use creator::{confirm, creation_command, render_summary, VenvCreator};
pub use env::{compose_path, EnvConfig, DEFAULT_PYTHON, DEFAULT_VENV_NAME};
pub use launcher::{activation_script, ActivationLauncher, LaunchOutcome, ACTIVATION_SCRIPT_NAME};
pub use locator::{find_activation_marker, ACTIVATION_MARKER};

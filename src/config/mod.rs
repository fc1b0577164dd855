pub mod session;
pub mod settings;
pub mod validation;

pub use session::Session;
pub use settings::Settings;
pub use validation::{validate_settings, validate_venv_name};

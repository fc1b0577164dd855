pub mod color;
pub mod error;
pub mod fs;
pub mod platform;
pub mod process;

pub use color::{color_text, Tint};
pub use error::{EmuError, Result};
pub use fs::{collect_directory_names, make_executable};
pub use platform::Platform;
pub use process::{CapturedOutput, CommandRunner, CommandSpec, ProcessExecutor};

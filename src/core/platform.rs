use std::fmt;

/// OS family the activation step knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
    Unsupported,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Accepts both Rust's `std::env::consts::OS` names and the `sys.platform`
    /// style names (`win32`, `linux2`).
    pub fn from_os(os: &str) -> Self {
        match os.trim().to_ascii_lowercase().as_str() {
            "linux" | "linux2" | "macos" | "darwin" | "freebsd" | "openbsd" | "netbsd"
            | "dragonfly" => Platform::Posix,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Unsupported,
        }
    }

    pub fn path_separator(self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Posix | Platform::Unsupported => ':',
        }
    }

    /// Directory inside a venv that holds its executables.
    pub fn bin_dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "Scripts",
            Platform::Posix | Platform::Unsupported => "bin",
        }
    }

    pub fn dir_separator(self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Posix | Platform::Unsupported => '/',
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
            Platform::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

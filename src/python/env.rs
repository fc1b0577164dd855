use crate::core::Platform;

pub const DEFAULT_VENV_NAME: &str = "venv";
pub const DEFAULT_PYTHON: &str = "python3";

/// The environment a launched child should see. Composing the venv into
/// `path` yields a new value; the process environment is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub venv_name: String,
    pub python: String,
    pub path: String,
}

impl EnvConfig {
    pub fn new(
        venv_name: impl Into<String>,
        python: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            venv_name: venv_name.into(),
            python: python.into(),
            path: path.into(),
        }
    }

    fn venv_root(&self, platform: Platform) -> &str {
        let sep = platform.dir_separator();
        let trimmed = self.venv_name.trim_end_matches(['/', sep]);
        if trimmed.is_empty() {
            &self.venv_name
        } else {
            trimmed
        }
    }

    /// `venv/bin` on POSIX, `venv\Scripts` on Windows.
    pub fn venv_bin_dir(&self, platform: Platform) -> String {
        format!(
            "{}{}{}",
            self.venv_root(platform),
            platform.dir_separator(),
            platform.bin_dir_name()
        )
    }

    /// Path of the POSIX `activate` script relative to the working directory.
    pub fn activate_script(&self) -> String {
        format!("{}/bin/activate", self.venv_root(Platform::Posix))
    }

    /// Path of the Windows batch activation script relative to the working
    /// directory.
    pub fn activate_batch(&self) -> String {
        format!("{}\\scripts\\activate.bat", self.venv_root(Platform::Windows))
    }

    pub fn with_venv_on_path(&self, platform: Platform) -> Self {
        Self {
            path: compose_path(&self.venv_bin_dir(platform), &self.path, platform),
            ..self.clone()
        }
    }
}

pub fn compose_path(bin_dir: &str, existing: &str, platform: Platform) -> String {
    if existing.is_empty() {
        return bin_dir.to_string();
    }
    format!("{}{}{}", bin_dir, platform.path_separator(), existing)
}

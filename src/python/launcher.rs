use crate::core::error::{EmuError, Result};
use crate::core::{make_executable, CommandRunner, CommandSpec, Platform, Tint};
use crate::python::env::EnvConfig;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the self-deleting helper written into the working directory on
/// POSIX systems.
pub const ACTIVATION_SCRIPT_NAME: &str = "script_venv_activate.sh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched { exit_code: i32 },
    Unsupported,
}

/// Contents of the POSIX activation script: source the venv, remove the
/// script, then hand over to an interactive bash.
pub fn activation_script(env: &EnvConfig) -> String {
    format!(
        "#!/bin/bash\nsource {}\nrm -f ./{}\nbash\n",
        env.activate_script(),
        ACTIVATION_SCRIPT_NAME
    )
}

pub struct ActivationLauncher<'a, R> {
    runner: &'a R,
    platform: Platform,
    work_dir: &'a Path,
}

impl<'a, R: CommandRunner> ActivationLauncher<'a, R> {
    pub fn new(runner: &'a R, platform: Platform, work_dir: &'a Path) -> Self {
        Self {
            runner,
            platform,
            work_dir,
        }
    }

    pub fn script_path(&self) -> PathBuf {
        self.work_dir.join(ACTIVATION_SCRIPT_NAME)
    }

    /// Open an interactive shell with `env` activated. Blocks until the user
    /// leaves that shell.
    pub async fn launch<W: Write>(&self, env: &EnvConfig, out: &mut W) -> Result<LaunchOutcome> {
        match self.platform {
            Platform::Posix => self.launch_posix(env).await,
            Platform::Windows => self.launch_windows(env).await,
            Platform::Unsupported => {
                writeln!(
                    out,
                    "{}: That script does not support user OS!",
                    Tint::Red.paint("Warning!")
                )?;
                Ok(LaunchOutcome::Unsupported)
            }
        }
    }

    async fn launch_posix(&self, env: &EnvConfig) -> Result<LaunchOutcome> {
        let script_path = self.script_path();
        let spec = CommandSpec::new(script_path.to_string_lossy())
            .env("PATH", &env.path)
            .current_dir(self.work_dir);

        match self.runner.interactive(&spec).await {
            Ok(exit_code) => return Ok(LaunchOutcome::Launched { exit_code }),
            Err(EmuError::CommandNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        tracing::debug!(path = %script_path.display(), "writing activation script");
        self.write_script(&script_path, env).await?;

        match self.runner.interactive(&spec).await {
            Ok(exit_code) => Ok(LaunchOutcome::Launched { exit_code }),
            Err(EmuError::CommandNotFound(_)) => {
                Err(EmuError::ActivationScriptMissing(script_path))
            }
            Err(e) => Err(e),
        }
    }

    async fn launch_windows(&self, env: &EnvConfig) -> Result<LaunchOutcome> {
        let spec = CommandSpec::new("cmd")
            .args(["/k".to_string(), env.activate_batch()])
            .env("PATH", &env.path)
            .current_dir(self.work_dir);

        let exit_code = self.runner.interactive(&spec).await?;
        Ok(LaunchOutcome::Launched { exit_code })
    }

    async fn write_script(&self, path: &Path, env: &EnvConfig) -> Result<()> {
        tokio::fs::write(path, activation_script(env)).await?;
        make_executable(path).await?;
        Ok(())
    }
}

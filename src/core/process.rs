use crate::core::error::{EmuError, Result};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// A program invocation: argv plus the environment overrides and working
/// directory the child should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The full argv, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(EmuError::InvalidCommand(format!(
                "empty program name (args: {:?})",
                self.args
            )));
        }
        Ok(())
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs child processes. `capture` treats a non-zero exit as an error;
/// `interactive` hands the terminal over and reports the child's exit code.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput>;

    async fn interactive(&self, spec: &CommandSpec) -> Result<i32>;
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    fn spawn_error(spec: &CommandSpec, e: io::Error) -> EmuError {
        match e.kind() {
            io::ErrorKind::PermissionDenied => EmuError::PermissionDenied(spec.to_string()),
            io::ErrorKind::NotFound => EmuError::CommandNotFound(spec.program.clone()),
            _ => EmuError::Io(e),
        }
    }
}

impl CommandRunner for ProcessExecutor {
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        spec.validate()?;
        tracing::debug!(command = %spec, "running captured command");

        let output = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(EmuError::NonZeroExit {
                command: spec.to_string(),
                code: output.status.code().unwrap_or(1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CapturedOutput { stdout, stderr })
    }

    async fn interactive(&self, spec: &CommandSpec) -> Result<i32> {
        spec.validate()?;
        tracing::debug!(command = %spec, "running interactive command");

        let status = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(status.code().unwrap_or(0))
    }
}

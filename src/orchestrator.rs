use crate::config::Session;
use crate::core::error::{EmuError, Result};
use crate::core::{CommandRunner, Tint};
use crate::python::{
    confirm, find_activation_marker, render_summary, ActivationLauncher, LaunchOutcome,
    VenvCreator,
};
use colored::Colorize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Launched { exit_code: i32 },
    NotFound,
    Unsupported,
}

/// Drives one run: look for an environment, create it on request, then hand
/// the terminal to an activated shell.
pub struct Orchestrator<'a, R> {
    session: &'a Session,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Orchestrator<'a, R> {
    pub fn new(session: &'a Session, runner: &'a R) -> Self {
        Self { session, runner }
    }

    pub fn print_system_info<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", Tint::Yellow.paint("\n\t--- SYSTEM INFO ---\n"))?;
        writeln!(out, "{}: {}", Tint::Blue.paint("System"), self.session.os)?;
        writeln!(
            out,
            "{}: {}",
            Tint::Red.paint("Script Path"),
            self.session.work_dir.display()
        )?;
        Ok(())
    }

    /// Launch a shell if an environment exists below the working directory.
    /// With `forced`, a missing environment is reported to the user.
    pub async fn try_activate<W: Write>(&self, forced: bool, out: &mut W) -> Result<Activation> {
        let Some(marker) = find_activation_marker(&self.session.work_dir) else {
            if forced {
                writeln!(
                    out,
                    "{}: you are trying to start Python ENV but ENV files not found!",
                    Tint::Red.paint("Warning!")
                )?;
            }
            return Ok(Activation::NotFound);
        };

        tracing::debug!(marker = %marker.display(), "found activation marker");
        writeln!(out, "\n{}: your venv folder was found!", Tint::Green.paint("Success!"))?;
        writeln!(out, "{}", Tint::Green.paint("\n\t---INIT TERMINAL IN ENV---\n"))?;
        out.flush()?;

        let env = self.session.env.with_venv_on_path(self.session.platform);
        let launcher =
            ActivationLauncher::new(self.runner, self.session.platform, &self.session.work_dir);

        match launcher.launch(&env, out).await? {
            LaunchOutcome::Launched { exit_code } => Ok(Activation::Launched { exit_code }),
            LaunchOutcome::Unsupported => Ok(Activation::Unsupported),
        }
    }

    /// Confirm with the user, create the environment and print what was made.
    pub async fn create<I: BufRead, W: Write>(&self, input: &mut I, out: &mut W) -> Result<()> {
        writeln!(out, "{}: Your venv folder wasn't found!", Tint::Red.paint("Warning!"))?;

        if !self.session.assume_yes {
            writeln!(
                out,
                "- Do you want to install it with the default folder name {}?\n {}",
                Tint::Green.paint(&self.session.env.venv_name),
                "=".repeat(60)
            )?;
            if !confirm(input, out, self.session.max_attempts)? {
                return Err(EmuError::Declined);
            }
        }

        let creator = VenvCreator::new(self.runner, &self.session.work_dir);
        let created = creator.create(&self.session.env).await?;
        writeln!(out, "\n{}", render_summary(&created))?;
        Ok(())
    }

    /// Full flow: activate an existing environment, or create one and then
    /// activate it. Returns the exit code of the launched shell.
    pub async fn start<I: BufRead, W: Write>(&self, input: &mut I, out: &mut W) -> Result<i32> {
        self.print_system_info(out)?;

        match self.try_activate(false, out).await? {
            Activation::Launched { exit_code } => return Ok(exit_code),
            Activation::Unsupported => return Err(self.unsupported()),
            Activation::NotFound => {}
        }

        self.create(input, out).await?;
        self.activate(out).await
    }

    /// Activate without ever creating anything.
    pub async fn activate<W: Write>(&self, out: &mut W) -> Result<i32> {
        match self.try_activate(true, out).await? {
            Activation::Launched { exit_code } => Ok(exit_code),
            Activation::Unsupported => Err(self.unsupported()),
            Activation::NotFound => Err(EmuError::EnvNotFound(self.session.work_dir.clone())),
        }
    }

    /// Create the environment if missing, but do not launch a shell.
    pub async fn create_only<I: BufRead, W: Write>(
        &self,
        input: &mut I,
        out: &mut W,
    ) -> Result<()> {
        if let Some(marker) = find_activation_marker(&self.session.work_dir) {
            writeln!(
                out,
                "{} Virtual environment already exists ({})",
                "ℹ".blue().bold(),
                marker.display()
            )?;
            return Ok(());
        }

        self.create(input, out).await?;
        writeln!(out, "Terminal emulation wasn't enabled")?;
        Ok(())
    }

    fn unsupported(&self) -> EmuError {
        EmuError::UnsupportedPlatform(self.session.os.clone())
    }
}

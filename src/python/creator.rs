use crate::core::error::{EmuError, Result};
use crate::core::{collect_directory_names, CommandRunner, CommandSpec, Tint};
use crate::python::env::EnvConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

pub const CONFIRM_PROMPT: &str = "Is this ok? [y/N]:";
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

const COLUMN_WIDTH: usize = 16;
const NAME_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Proceed,
    Decline,
    Invalid,
}

/// An empty answer accepts, matching the `y`/`yes` spellings.
pub fn parse_answer(input: &str) -> Answer {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Answer::Proceed,
        "n" | "no" => Answer::Decline,
        _ => Answer::Invalid,
    }
}

/// Ask until a recognised answer arrives or `max_attempts` lines have been
/// read. Returns `Ok(false)` on decline or end of input.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    max_attempts: usize,
) -> Result<bool> {
    let max_attempts = max_attempts.max(1);

    for _ in 0..max_attempts {
        write!(out, "{}", CONFIRM_PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(false);
        }

        match parse_answer(&line) {
            Answer::Proceed => return Ok(true),
            Answer::Decline => return Ok(false),
            Answer::Invalid => writeln!(
                out,
                "{}: Invalid Command. Try again or exit from script!",
                Tint::Red.paint("Warning!")
            )?,
        }
    }

    Err(EmuError::PromptExhausted(max_attempts))
}

/// `[python, "-m", "venv", name]`
pub fn creation_command(env: &EnvConfig) -> CommandSpec {
    CommandSpec::new(env.python.clone()).args(["-m", "venv", env.venv_name.as_str()])
}

/// Two-column `File | Status` table listing each created directory.
pub fn render_summary(dirs: &[String]) -> String {
    let mut names: Vec<String> = Vec::new();
    for dir in dirs {
        let short: String = dir.chars().take(NAME_LIMIT).collect();
        if !names.contains(&short) {
            names.push(short);
        }
    }

    let mut table = format!(
        "{:^w$}|{:^w$}\n{}+{}",
        "File",
        "Status",
        "-".repeat(COLUMN_WIDTH),
        "-".repeat(COLUMN_WIDTH),
        w = COLUMN_WIDTH
    );
    let status = format!("{:>w$}", " - Created!", w = COLUMN_WIDTH);
    for name in names {
        table.push_str(&format!(
            "\n{:<w$}|{}",
            name,
            Tint::Green.paint(&status),
            w = COLUMN_WIDTH
        ));
    }
    table
}

pub struct VenvCreator<'a, R> {
    runner: &'a R,
    work_dir: &'a Path,
}

impl<'a, R: CommandRunner> VenvCreator<'a, R> {
    pub fn new(runner: &'a R, work_dir: &'a Path) -> Self {
        Self { runner, work_dir }
    }

    /// Run the creation tool and return the directories it left anywhere
    /// under the venv folder.
    pub async fn create(&self, env: &EnvConfig) -> Result<Vec<String>> {
        let spec = creation_command(env).current_dir(self.work_dir);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map_err(anyhow::Error::from)?,
        );
        pb.set_message(format!("Creating virtual environment {}...", env.venv_name));
        pb.enable_steady_tick(Duration::from_millis(100));

        let started = Instant::now();
        let result = self.runner.capture(&spec).await;
        pb.finish_and_clear();
        result?;

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            venv = %env.venv_name,
            "virtual environment created"
        );

        Ok(collect_directory_names(&self.work_dir.join(&env.venv_name)))
    }
}

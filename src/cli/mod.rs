pub mod commands;

use crate::config::Settings;
use crate::python::creator::DEFAULT_MAX_ATTEMPTS;
use crate::python::env::{DEFAULT_PYTHON, DEFAULT_VENV_NAME};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "emu",
    version,
    about = "Find or create a Python virtual environment and open a shell inside it",
    long_about = None
)]
pub struct Cli {
    /// Virtual environment folder name
    #[arg(short, long, global = true, env = "EMU_VENV_NAME", default_value = DEFAULT_VENV_NAME)]
    pub name: String,

    /// Interpreter used to create the environment (`<python> -m venv <name>`)
    #[arg(short, long, global = true, env = "EMU_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Create the environment without asking
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// How many unrecognised answers to accept before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Activate the environment, creating it first if needed (default)
    Start,

    /// Activate an existing environment; never create one
    Activate,

    /// Create the environment without launching a shell
    Create,

    /// Show system info and where the environment was found
    Info,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            venv_name: self.name.clone(),
            python: self.python.clone(),
            assume_yes: self.yes,
            max_attempts: self.max_attempts,
        }
    }
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let settings = cli.settings();

    match cli.command.unwrap_or(Commands::Start) {
        Commands::Start => commands::start::execute(settings).await,

        Commands::Activate => commands::activate::execute(settings).await,

        Commands::Create => commands::create::execute(settings).await,

        Commands::Info => commands::info::execute(settings).await,
    }
}

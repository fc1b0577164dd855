use crate::config::{Session, Settings};
use crate::core::error::Result;
use crate::core::ProcessExecutor;
use crate::orchestrator::Orchestrator;
use crate::python::find_activation_marker;
use colored::Colorize;
use std::io;

pub async fn execute(settings: Settings) -> Result<()> {
    let session = Session::from_current_process(settings)?;
    let orchestrator = Orchestrator::new(&session, &ProcessExecutor);
    orchestrator.print_system_info(&mut io::stdout())?;

    println!("{}: {}", "Platform".blue(), session.platform);
    println!(
        "{}: {}",
        "Venv bin".blue(),
        session.env.venv_bin_dir(session.platform)
    );

    match find_activation_marker(&session.work_dir) {
        Some(marker) => println!("{} Environment found ({})", "✓".green(), marker.display()),
        None => {
            println!("{}", "○ No environment found".yellow());
            println!("  Run {} to create one", "emu".cyan());
        }
    }

    Ok(())
}

use crate::config::{Session, Settings};
use crate::core::error::Result;
use crate::core::ProcessExecutor;
use crate::orchestrator::Orchestrator;
use std::io;

pub async fn execute(settings: Settings) -> Result<()> {
    let session = Session::from_current_process(settings)?;
    let orchestrator = Orchestrator::new(&session, &ProcessExecutor);

    let mut out = io::stdout();
    orchestrator.print_system_info(&mut out)?;
    let exit_code = orchestrator.activate(&mut out).await?;

    std::process::exit(exit_code);
}

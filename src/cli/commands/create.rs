use crate::config::{Session, Settings};
use crate::core::error::Result;
use crate::core::ProcessExecutor;
use crate::orchestrator::Orchestrator;
use std::io;

pub async fn execute(settings: Settings) -> Result<()> {
    let session = Session::from_current_process(settings)?;
    let orchestrator = Orchestrator::new(&session, &ProcessExecutor);

    let mut input = io::stdin().lock();
    let mut out = io::stdout();
    orchestrator.print_system_info(&mut out)?;
    orchestrator.create_only(&mut input, &mut out).await
}

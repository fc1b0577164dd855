pub mod cli;
pub mod config;
pub mod core;
pub mod orchestrator;
pub mod python;

#[cfg(test)]
mod testing;

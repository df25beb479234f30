//! Command handler modules for the carddraw CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors returned as `CliError`; the dispatcher prints them

mod cfg;
mod export;
mod generate;
mod query;
mod sim;
mod table;

pub use cfg::handle_cfg_command;
pub use export::handle_export_command;
pub use generate::handle_generate_command;
pub use query::handle_query_command;
pub use sim::handle_sim_command;
pub use table::handle_table_command;

use carddraw_engine::engine::ProbabilityEngine;

use crate::config::{self, Config, Overrides};
use crate::error::CliError;

/// Resolves configuration with the given command-line overrides applied.
pub(crate) fn resolve_config(overrides: &Overrides) -> Result<Config, CliError> {
    Ok(config::resolve(overrides)?.config)
}

/// Builds the engine for `deck_size` using the configured bounds.
pub(crate) fn build_engine(cfg: &Config, deck_size: usize) -> Result<ProbabilityEngine, CliError> {
    let deck = cfg.deck_configuration(deck_size)?;
    Ok(ProbabilityEngine::new(deck)?)
}

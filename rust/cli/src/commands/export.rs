//! Single CSV set export into an existing directory.

use std::io::Write;
use std::path::Path;

use carddraw_engine::table::ProbabilityKind;

use super::{build_engine, resolve_config};
use crate::cli::BoundsArgs;
use crate::error::CliError;
use crate::export::{ExportRequest, Inversion, MatchFormat, write_export};

/// Handles the export command.
///
/// # Arguments
///
/// * `outdir` - Existing directory receiving one CSV per target count
/// * `prefix` - File name prefix (`{prefix}_{deck}_{s}.csv`)
/// * `kind` - Which distribution to export
/// * `match_format` / `inverse` - Value transforms
/// * `deck_size` - Deck to compute, defaults to the first configured size
#[allow(clippy::too_many_arguments)]
pub fn handle_export_command(
    outdir: &str,
    prefix: &str,
    kind: ProbabilityKind,
    match_format: MatchFormat,
    inverse: bool,
    deck_size: Option<usize>,
    bounds: &BoundsArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if prefix.trim().is_empty() {
        return Err(CliError::InvalidInput("prefix must not be empty".into()));
    }
    let cfg = resolve_config(&bounds.overrides())?;
    let engine = build_engine(&cfg, deck_size.unwrap_or(cfg.primary_deck_size()))?;
    let request = ExportRequest::new(prefix, kind, match_format, Inversion::from_flag(inverse));
    let written = write_export(&engine, Path::new(outdir), &request)?;
    writeln!(out, "Wrote {} files to {}", written.len(), outdir)?;
    Ok(())
}

//! Full table generation: one engine per deck size, built in parallel, each
//! writing the four standard CSV sets.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use super::{build_engine, resolve_config};
use crate::cli::BoundsArgs;
use crate::config::{Config, Overrides};
use crate::error::CliError;
use crate::export::{ExportRequest, write_export};
use crate::io_utils::ensure_dir;

/// Handle the generate command.
///
/// Creates the output directory if needed, builds every configured deck size
/// concurrently and writes `mtg_exact`, `mtg_atleast`, `mtg_atmost` and
/// `mtg_atmost_bo1_inverse` files for each. Engines share nothing, so the only
/// coordination is collecting their results.
///
/// # Errors
///
/// Configuration and I/O failures, or a defect reported by any engine. Files
/// for other deck sizes may already have been written when an error returns.
pub fn handle_generate_command(
    outdir: Option<String>,
    deck_sizes: Vec<usize>,
    bounds: &BoundsArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let overrides = Overrides {
        deck_sizes: Some(deck_sizes),
        outdir,
        ..bounds.overrides()
    };
    let cfg = resolve_config(&overrides)?;
    let dir = PathBuf::from(&cfg.outdir);
    ensure_dir(&dir).map_err(CliError::Config)?;

    writeln!(out, "Starting calculations...")?;
    let started = Instant::now();

    let sizes = unique_sizes(&cfg.deck_sizes);
    let results: Vec<Result<(usize, usize), CliError>> = sizes
        .par_iter()
        .map(|&size| generate_deck(&cfg, size, &dir).map(|files| (size, files)))
        .collect();

    for result in results {
        let (size, files) = result?;
        writeln!(out, "Deck size {}: {} files", size, files)?;
    }
    writeln!(out, "Files written to {}.", dir.display())?;
    writeln!(out, "Elapsed time: {:?}", started.elapsed())?;
    Ok(())
}

fn generate_deck(cfg: &Config, deck_size: usize, dir: &Path) -> Result<usize, CliError> {
    let engine = build_engine(cfg, deck_size)?;
    let mut files = 0;
    for request in ExportRequest::standard_set() {
        files += write_export(&engine, dir, &request)?.len();
    }
    info!(deck_size, files, "deck exported");
    Ok(files)
}

fn unique_sizes(sizes: &[usize]) -> Vec<usize> {
    let mut seen = HashSet::new();
    sizes.iter().copied().filter(|s| seen.insert(*s)).collect()
}

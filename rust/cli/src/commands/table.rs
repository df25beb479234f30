use std::io::Write;

use carddraw_engine::engine::SPECIFIC_CARDS_IN_DECK;
use carddraw_engine::errors::QueryRangeError;
use carddraw_engine::table::ProbabilityKind;

use super::{build_engine, resolve_config};
use crate::cli::BoundsArgs;
use crate::error::CliError;
use crate::export::{ExportRequest, Inversion, MatchFormat, render_csv};

/// Handle the table command: the CSV an export would write for one target
/// count, printed to `out` instead of a file.
pub fn handle_table_command(
    in_deck: usize,
    kind: ProbabilityKind,
    match_format: MatchFormat,
    inverse: bool,
    deck_size: Option<usize>,
    bounds: &BoundsArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(&bounds.overrides())?;
    if in_deck < cfg.min_card_count || in_deck > cfg.max_card_count {
        return Err(QueryRangeError {
            parameter: SPECIFIC_CARDS_IN_DECK,
            value: in_deck,
            min: cfg.min_card_count,
            max: cfg.max_card_count,
        }
        .into());
    }
    let engine = build_engine(&cfg, deck_size.unwrap_or(cfg.primary_deck_size()))?;
    let request = ExportRequest::new("stdout", kind, match_format, Inversion::from_flag(inverse));
    write!(out, "{}", render_csv(&engine, in_deck, &request)?)?;
    Ok(())
}

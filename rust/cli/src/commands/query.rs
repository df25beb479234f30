use std::io::Write;

use carddraw_engine::table::ProbabilityKind;

use super::{build_engine, resolve_config};
use crate::cli::BoundsArgs;
use crate::error::CliError;

/// Handle the query command: print one precomputed probability.
///
/// # Errors
///
/// `CliError::InvalidInput` when a count lies outside the configured bounds.
pub fn handle_query_command(
    in_deck: usize,
    hand: usize,
    in_hand: usize,
    kind: ProbabilityKind,
    deck_size: Option<usize>,
    bounds: &BoundsArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(&bounds.overrides())?;
    let engine = build_engine(&cfg, deck_size.unwrap_or(cfg.primary_deck_size()))?;
    let p = engine.probability(in_deck, hand, in_hand, kind)?;
    writeln!(out, "{}", p)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn bounds() -> BoundsArgs {
        BoundsArgs {
            min_cards: Some(1),
            max_cards: Some(4),
            min_hand: Some(1),
            max_hand: Some(7),
        }
    }

    #[test]
    #[serial]
    fn prints_probability() {
        let mut out = Vec::new();
        handle_query_command(4, 7, 1, ProbabilityKind::Exact, Some(60), &bounds(), &mut out)
            .unwrap();
        let p: f64 = String::from_utf8(out).unwrap().trim().parse().unwrap();
        assert!((p - 0.336_280_209_6).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn out_of_range_names_parameter() {
        let mut out = Vec::new();
        let err =
            handle_query_command(0, 7, 1, ProbabilityKind::Exact, Some(60), &bounds(), &mut out)
                .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("specificCardsInDeck must be 1-4"));
        assert!(out.is_empty());
    }
}

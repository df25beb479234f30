//! Monte-Carlo cross-check: shuffle a seeded deck many times and compare the
//! observed target counts with the enumerated exact distribution.

use std::io::Write;

use carddraw_engine::config::DeckConfiguration;
use carddraw_engine::engine::ProbabilityEngine;
use carddraw_engine::errors::EngineError;
use carddraw_engine::sampler::sample;
use carddraw_engine::table::ProbabilityKind;

use super::resolve_config;
use crate::config::Overrides;
use crate::error::CliError;

/// Seed used when neither `--seed` nor the configuration provides one.
pub const DEFAULT_SEED: u64 = 0xC0DE_CA4D;

/// Handle the sim command.
///
/// Prints one CSV line per k (`k,sampled,exact,diff`) followed by the largest
/// absolute deviation.
pub fn handle_sim_command(
    in_deck: usize,
    hand: usize,
    trials: u64,
    seed: Option<u64>,
    deck_size: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be >= 1".into()));
    }
    let cfg = resolve_config(&Overrides {
        seed,
        ..Overrides::default()
    })?;
    let deck_size = deck_size.unwrap_or(cfg.primary_deck_size());
    let seed = cfg.seed.unwrap_or(DEFAULT_SEED);

    let bounds = DeckConfiguration::new(deck_size, in_deck, in_deck, hand, hand)
        .map_err(EngineError::from)?;
    let engine = ProbabilityEngine::new(bounds)?;
    let exact = engine.table(ProbabilityKind::Exact).row(in_deck, hand).ok_or_else(|| {
        CliError::Defect(format!("missing row for s={} h={}", in_deck, hand))
    })?;
    let sampled = sample(deck_size, in_deck, hand, trials, seed).map_err(EngineError::from)?;

    writeln!(out, "k,sampled,exact,diff")?;
    for (k, (f, e)) in sampled.frequencies().iter().zip(exact).enumerate() {
        writeln!(out, "{},{:.5},{:.5},{:.5}", k, f, e, (f - e).abs())?;
    }
    writeln!(
        out,
        "max deviation: {:.5} ({} trials, seed {})",
        sampled.max_deviation(exact),
        trials,
        seed
    )?;
    Ok(())
}

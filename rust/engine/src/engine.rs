use std::time::Instant;

use tracing::{debug, info};

use crate::config::DeckConfiguration;
use crate::cumulative::CumulativeDistribution;
use crate::distribution::ExactDistribution;
use crate::draw_chance::DrawChanceTable;
use crate::errors::{EngineError, QueryRangeError};
use crate::table::{ProbabilityKind, ProbabilityTable};
use crate::verify::verify;

pub const SPECIFIC_CARDS_IN_DECK: &str = "specificCardsInDeck";
pub const CARDS_IN_HAND: &str = "cardsInHand";
pub const SPECIFIC_CARDS_IN_HAND: &str = "specificCardsInHand";

/// Fully materialized draw probabilities for one deck configuration.
///
/// Every table is built and verified inside [`ProbabilityEngine::new`]; an
/// engine value therefore always holds complete, checked data and is
/// read-only for its whole lifetime. Engines share nothing, so independent
/// instances can be built on separate threads.
///
/// # Examples
///
/// ```
/// use carddraw_engine::config::DeckConfiguration;
/// use carddraw_engine::engine::ProbabilityEngine;
/// use carddraw_engine::table::ProbabilityKind;
///
/// let cfg = DeckConfiguration::new(60, 1, 4, 1, 7).unwrap();
/// let engine = ProbabilityEngine::new(cfg).unwrap();
///
/// // Chance of at least one of four copies in an opening hand of seven
/// let p = engine.probability(4, 7, 1, ProbabilityKind::AtLeast).unwrap();
/// assert!((p - 0.3995).abs() < 1e-4);
///
/// assert!(engine.probability(0, 7, 1, ProbabilityKind::Exact).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityEngine {
    config: DeckConfiguration,
    exact: ProbabilityTable,
    at_least: ProbabilityTable,
    at_most: ProbabilityTable,
}

impl ProbabilityEngine {
    /// Builds every table for `config`.
    ///
    /// For each target count s the draw chances are tabulated once, then for
    /// each hand size every draw sequence is enumerated, bucketed, verified to
    /// sum to one, and only then turned into the cumulative tails.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvariantViolation`] or [`EngineError::UnreachableState`]
    /// if the computation is inconsistent. Nothing partial is returned.
    pub fn new(config: DeckConfiguration) -> Result<Self, EngineError> {
        let started = Instant::now();
        let mut exact = ProbabilityTable::zeroed(ProbabilityKind::Exact, &config);
        let mut at_least = ProbabilityTable::zeroed(ProbabilityKind::AtLeast, &config);
        let mut at_most = ProbabilityTable::zeroed(ProbabilityKind::AtMost, &config);

        for s in config.card_counts() {
            let chances = DrawChanceTable::build(config.deck_size(), s, config.max_hand_size());
            for h in config.hand_sizes() {
                let verified = verify(ExactDistribution::aggregate(&chances, h)?)?;
                let tails = CumulativeDistribution::derive(&verified);
                exact.fill_row(s, h, verified.as_slice());
                at_least.fill_row(s, h, tails.at_least());
                at_most.fill_row(s, h, tails.at_most());
            }
            debug!(
                deck_size = config.deck_size(),
                s,
                hand_sizes = ?config.hand_sizes(),
                "distributions verified"
            );
        }

        info!(
            deck_size = config.deck_size(),
            card_counts = ?config.card_counts(),
            hand_sizes = ?config.hand_sizes(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "probability tables built"
        );

        Ok(Self {
            config,
            exact,
            at_least,
            at_most,
        })
    }

    pub fn config(&self) -> &DeckConfiguration {
        &self.config
    }

    pub fn deck_size(&self) -> usize {
        self.config.deck_size()
    }

    /// Precomputed probability for `specific_in_hand` (k) target cards in a
    /// hand of `cards_in_hand` (h) drawn from a deck with `specific_in_deck` (s).
    ///
    /// # Errors
    ///
    /// [`QueryRangeError`] naming the first parameter outside its configured
    /// inclusive range (k is bounded by `0..=h`).
    pub fn probability(
        &self,
        specific_in_deck: usize,
        cards_in_hand: usize,
        specific_in_hand: usize,
        kind: ProbabilityKind,
    ) -> Result<f64, QueryRangeError> {
        check_range(
            SPECIFIC_CARDS_IN_DECK,
            specific_in_deck,
            self.config.min_card_count(),
            self.config.max_card_count(),
        )?;
        check_range(
            CARDS_IN_HAND,
            cards_in_hand,
            self.config.min_hand_size(),
            self.config.max_hand_size(),
        )?;
        check_range(SPECIFIC_CARDS_IN_HAND, specific_in_hand, 0, cards_in_hand)?;

        // every key was bounds-checked above
        Ok(self
            .table(kind)
            .get(specific_in_deck, cards_in_hand, specific_in_hand)
            .unwrap_or_default())
    }

    /// The complete grid for `kind`, indexed by (s, h, k).
    pub fn table(&self, kind: ProbabilityKind) -> &ProbabilityTable {
        match kind {
            ProbabilityKind::Exact => &self.exact,
            ProbabilityKind::AtLeast => &self.at_least,
            ProbabilityKind::AtMost => &self.at_most,
        }
    }
}

fn check_range(
    parameter: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), QueryRangeError> {
    if value < min || value > max {
        return Err(QueryRangeError {
            parameter,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_rejects_hand_size_outside_bounds() {
        let engine = ProbabilityEngine::new(DeckConfiguration::new(20, 1, 3, 2, 4).unwrap()).unwrap();
        let err = engine
            .probability(2, 1, 0, ProbabilityKind::Exact)
            .unwrap_err();
        assert_eq!(err.parameter, CARDS_IN_HAND);
        assert_eq!((err.min, err.max), (2, 4));
        assert!(engine.probability(2, 5, 0, ProbabilityKind::Exact).is_err());
    }

    #[test]
    fn query_rejects_more_in_hand_than_drawn() {
        let engine = ProbabilityEngine::new(DeckConfiguration::new(20, 1, 3, 2, 4).unwrap()).unwrap();
        let err = engine
            .probability(2, 3, 4, ProbabilityKind::AtMost)
            .unwrap_err();
        assert_eq!(err.parameter, SPECIFIC_CARDS_IN_HAND);
        assert_eq!(err.to_string(), "specificCardsInHand must be 0-3 (got 4)");
    }

    #[test]
    fn query_reads_the_requested_table() {
        let engine = ProbabilityEngine::new(DeckConfiguration::new(20, 1, 3, 2, 4).unwrap()).unwrap();
        for kind in ProbabilityKind::ALL {
            let direct = engine.table(kind).get(3, 4, 2).unwrap();
            assert_eq!(engine.probability(3, 4, 2, kind).unwrap(), direct);
            assert_eq!(engine.table(kind).kind(), kind);
        }
    }
}

//! Monte-Carlo estimate of the exact distribution, used as an independent
//! cross-check of the enumerated tables. Nothing here feeds the engine.

use serde::Serialize;

use crate::deck::Deck;
use crate::errors::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledDistribution {
    pub deck_size: usize,
    pub targets: usize,
    pub hand_size: usize,
    pub trials: u64,
    /// `counts[k]` = number of trials with exactly k targets in hand
    pub counts: Vec<u64>,
}

impl SampledDistribution {
    pub fn frequencies(&self) -> Vec<f64> {
        let trials = self.trials.max(1) as f64;
        self.counts.iter().map(|&c| c as f64 / trials).collect()
    }

    /// Largest |empirical - expected| over k. Missing entries count as 0.
    pub fn max_deviation(&self, expected: &[f64]) -> f64 {
        self.frequencies()
            .iter()
            .enumerate()
            .map(|(k, f)| (f - expected.get(k).copied().unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    }
}

/// Shuffles a seeded deck `trials` times and records how many targets land in
/// the first `hand_size` cards.
///
/// # Errors
///
/// [`ConfigurationError`] if the deck is empty or smaller than the targets or
/// the hand.
pub fn sample(
    deck_size: usize,
    targets: usize,
    hand_size: usize,
    trials: u64,
    seed: u64,
) -> Result<SampledDistribution, ConfigurationError> {
    if deck_size == 0 {
        return Err(ConfigurationError::EmptyDeck);
    }
    if targets > deck_size {
        return Err(ConfigurationError::ExceedsDeck {
            name: "targets",
            value: targets,
            deck_size,
        });
    }
    if hand_size > deck_size {
        return Err(ConfigurationError::ExceedsDeck {
            name: "hand_size",
            value: hand_size,
            deck_size,
        });
    }

    let mut deck = Deck::new_with_seed(deck_size, targets, seed);
    let mut counts = vec![0u64; hand_size + 1];
    for _ in 0..trials {
        deck.shuffle();
        counts[deck.draw_targets(hand_size)] += 1;
    }
    Ok(SampledDistribution {
        deck_size,
        targets,
        hand_size,
        trials,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_trial() {
        let sampled = sample(60, 4, 7, 1_000, 42).unwrap();
        assert_eq!(sampled.counts.iter().sum::<u64>(), 1_000);
        assert_eq!(sampled.counts.len(), 8);
        assert!(sampled.counts[5..].iter().all(|&c| c == 0));
    }

    #[test]
    fn same_seed_same_counts() {
        assert_eq!(sample(40, 10, 6, 500, 9), sample(40, 10, 6, 500, 9));
    }

    #[test]
    fn rejects_hand_larger_than_deck() {
        assert!(sample(5, 1, 6, 10, 0).is_err());
        assert!(sample(0, 0, 0, 10, 0).is_err());
    }

    #[test]
    fn deviation_against_itself_is_zero() {
        let sampled = sample(20, 5, 4, 200, 1).unwrap();
        assert_eq!(sampled.max_deviation(&sampled.frequencies()), 0.0);
    }
}

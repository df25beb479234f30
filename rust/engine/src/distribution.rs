use crate::draw_chance::DrawChanceTable;
use crate::errors::EngineError;
use crate::sequence::SequenceEnumerator;

/// P(exactly k target cards among `hand_size` drawn), for k in `0..=hand_size`,
/// built by bucketing every enumerated sequence by its number of hits.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactDistribution {
    targets: usize,
    hand_size: usize,
    probabilities: Vec<f64>,
}

impl ExactDistribution {
    /// Enumerates all 2^`hand_size` sequences and sums their weights per
    /// success count. Buckets are accumulated in ascending bit-pattern order.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::UnreachableState`] from the sequence walk.
    pub fn aggregate(chances: &DrawChanceTable, hand_size: usize) -> Result<Self, EngineError> {
        let mut probabilities = vec![0.0f64; hand_size + 1];
        for seq in SequenceEnumerator::new(hand_size) {
            probabilities[seq.successes()] += seq.joint_probability(chances)?;
        }
        Ok(Self {
            targets: chances.targets(),
            hand_size,
            probabilities,
        })
    }

    pub fn targets(&self) -> usize {
        self.targets
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn get(&self, k: usize) -> Option<f64> {
        self.probabilities.get(k).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    /// Sum over k, added in ascending k.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(targets: usize, probabilities: Vec<f64>) -> Self {
        Self {
            targets,
            hand_size: probabilities.len() - 1,
            probabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: u64, k: u64) -> f64 {
        if k > n {
            return 0.0;
        }
        (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
    }

    fn hypergeometric(deck: u64, targets: u64, hand: u64, k: u64) -> f64 {
        binomial(targets, k) * binomial(deck - targets, hand - k) / binomial(deck, hand)
    }

    #[test]
    fn one_of_four_in_opening_seven() {
        let chances = DrawChanceTable::build(60, 4, 7);
        let exact = ExactDistribution::aggregate(&chances, 7).unwrap();
        let expected = hypergeometric(60, 4, 7, 1);
        assert!((exact.get(1).unwrap() - expected).abs() < 1e-9);
        assert!((exact.get(1).unwrap() - 0.336_280_209_6).abs() < 1e-9);
    }

    #[test]
    fn matches_hypergeometric_for_every_k() {
        let chances = DrawChanceTable::build(53, 9, 10);
        let exact = ExactDistribution::aggregate(&chances, 10).unwrap();
        for k in 0..=10u64 {
            let expected = hypergeometric(53, 9, 10, k);
            assert!(
                (exact.get(k as usize).unwrap() - expected).abs() < 1e-9,
                "k={k}"
            );
        }
    }

    #[test]
    fn counts_above_targets_are_zero() {
        let chances = DrawChanceTable::build(60, 2, 6);
        let exact = ExactDistribution::aggregate(&chances, 6).unwrap();
        for k in 3..=6 {
            assert_eq!(exact.get(k), Some(0.0));
        }
        assert_eq!(exact.get(7), None);
    }

    #[test]
    fn zero_targets_never_hit() {
        let chances = DrawChanceTable::build(60, 0, 5);
        let exact = ExactDistribution::aggregate(&chances, 5).unwrap();
        assert_eq!(exact.get(0), Some(1.0));
        assert_eq!(exact.total(), 1.0);
    }

    #[test]
    fn all_targets_always_hit() {
        let chances = DrawChanceTable::build(8, 8, 3);
        let exact = ExactDistribution::aggregate(&chances, 3).unwrap();
        assert_eq!(exact.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let chances = DrawChanceTable::build(60, 13, 12);
        let a = ExactDistribution::aggregate(&chances, 12).unwrap();
        let b = ExactDistribution::aggregate(&chances, 12).unwrap();
        let bits = |d: &ExactDistribution| {
            d.as_slice().iter().map(|p| p.to_bits()).collect::<Vec<_>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}

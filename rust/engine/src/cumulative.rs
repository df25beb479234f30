use crate::verify::VerifiedDistribution;

/// "At most k" and "at least k" tails of one verified exact distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    at_least: Vec<f64>,
    at_most: Vec<f64>,
}

impl CumulativeDistribution {
    /// `at_most[k]` is the running prefix sum of the exact table. `at_least[k]`
    /// adds `exact[k..=h]` in ascending order, so `at_least[h] == exact[h]`
    /// and `at_most[0] == exact[0]` hold bit for bit.
    ///
    /// The distribution is already verified to sum to one, so the full tails
    /// `at_least[0]` and `at_most[h]` are pinned to exactly 1 and every other
    /// value is capped at 1. Capping keeps both tails monotone.
    pub fn derive(exact: &VerifiedDistribution) -> Self {
        let values = exact.as_slice();

        let mut at_most = Vec::with_capacity(values.len());
        let mut running = 0.0f64;
        for &p in values {
            running += p;
            at_most.push(running.min(1.0));
        }

        let mut at_least: Vec<f64> = (0..values.len())
            .map(|k| values[k..].iter().fold(0.0f64, |acc, &p| acc + p).min(1.0))
            .collect();

        if let Some(first) = at_least.first_mut() {
            *first = 1.0;
        }
        if let Some(last) = at_most.last_mut() {
            *last = 1.0;
        }

        Self { at_least, at_most }
    }

    pub fn at_least(&self) -> &[f64] {
        &self.at_least
    }

    pub fn at_most(&self) -> &[f64] {
        &self.at_most
    }
}

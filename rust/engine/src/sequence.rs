//! Ordered draw-outcome sequences.
//!
//! A sequence of `len` draws is an integer bit pattern: bit `i - 1` holds the
//! outcome of draw `i` (set = target card drawn). Draws are always replayed
//! from the lowest bit upward, so the running success/failure counters used to
//! look up each conditional chance match the chronological draw order.

use crate::draw_chance::DrawChanceTable;
use crate::errors::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence {
    bits: u32,
    len: usize,
}

impl Sequence {
    pub fn new(bits: u32, len: usize) -> Self {
        debug_assert!(len <= 32);
        debug_assert!(len == 32 || bits >> len == 0);
        Self { bits, len }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Outcome of draw `position` (1-indexed, chronological).
    pub fn hit_at(&self, position: usize) -> bool {
        debug_assert!((1..=self.len).contains(&position));
        self.bits & (1 << (position - 1)) != 0
    }

    /// Outcomes in draw order, first draw first.
    pub fn draws(&self) -> impl Iterator<Item = bool> + '_ {
        (1..=self.len).map(move |position| self.hit_at(position))
    }

    /// Number of target cards drawn.
    pub fn successes(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Probability of drawing exactly this sequence.
    ///
    /// Multiplies the conditional chance of each outcome in draw order. Once the
    /// running weight reaches zero the sequence is impossible and the walk
    /// stops; reaching an unreachable state with non-zero weight means the
    /// chance table and the enumeration disagree.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnreachableState`] if a state without a tabulated chance
    /// is consulted on a still-possible path.
    pub fn joint_probability(&self, chances: &DrawChanceTable) -> Result<f64, EngineError> {
        let mut weight = 1.0f64;
        let mut successes = 0usize;
        let mut failures = 0usize;
        for hit in self.draws() {
            if weight == 0.0 {
                break;
            }
            let chance =
                chances
                    .chance(successes, failures)
                    .ok_or(EngineError::UnreachableState {
                        s: chances.targets(),
                        successes,
                        failures,
                    })?;
            if hit {
                weight *= chance;
                successes += 1;
            } else {
                weight *= 1.0 - chance;
                failures += 1;
            }
        }
        Ok(weight)
    }
}

/// Every sequence of a fixed length, in ascending bit-pattern order.
#[derive(Debug, Clone)]
pub struct SequenceEnumerator {
    next: u64,
    end: u64,
    len: usize,
}

impl SequenceEnumerator {
    pub fn new(len: usize) -> Self {
        debug_assert!(len < 32);
        Self {
            next: 0,
            end: 1u64 << len,
            len,
        }
    }

    /// Total number of sequences (2^len).
    pub fn count_total(&self) -> u64 {
        self.end
    }
}

impl Iterator for SequenceEnumerator {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        if self.next >= self.end {
            return None;
        }
        let seq = Sequence::new(self.next as u32, self.len);
        self.next += 1;
        Some(seq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.end - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SequenceEnumerator {}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::DeckConfiguration;

/// Which distribution a query or table refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityKind {
    /// Exactly k target cards in hand
    Exact,
    /// k or more target cards in hand
    AtLeast,
    /// k or fewer target cards in hand
    AtMost,
}

impl ProbabilityKind {
    pub const ALL: [ProbabilityKind; 3] = [
        ProbabilityKind::Exact,
        ProbabilityKind::AtLeast,
        ProbabilityKind::AtMost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbabilityKind::Exact => "exact",
            ProbabilityKind::AtLeast => "atleast",
            ProbabilityKind::AtMost => "atmost",
        }
    }
}

impl fmt::Display for ProbabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbabilityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "exact" => Ok(ProbabilityKind::Exact),
            "atleast" => Ok(ProbabilityKind::AtLeast),
            "atmost" => Ok(ProbabilityKind::AtMost),
            _ => Err(format!(
                "unknown probability kind '{}' (expected exact, atleast or atmost)",
                s
            )),
        }
    }
}

/// Every probability of one kind, addressed by (s, h, k).
///
/// Storage is a single flat vector. Each s owns a block holding, for every
/// configured hand size h, the `h + 1` values for k = 0..=h; `hand_offsets`
/// gives where each h starts inside a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityTable {
    kind: ProbabilityKind,
    min_card_count: usize,
    max_card_count: usize,
    min_hand_size: usize,
    max_hand_size: usize,
    #[serde(skip)]
    block_len: usize,
    #[serde(skip)]
    hand_offsets: Vec<usize>,
    values: Vec<f64>,
}

impl ProbabilityTable {
    pub(crate) fn zeroed(kind: ProbabilityKind, config: &DeckConfiguration) -> Self {
        let mut hand_offsets = Vec::with_capacity(config.hand_sizes().count());
        let mut block_len = 0;
        for h in config.hand_sizes() {
            hand_offsets.push(block_len);
            block_len += h + 1;
        }
        let blocks = config.card_counts().count();
        Self {
            kind,
            min_card_count: config.min_card_count(),
            max_card_count: config.max_card_count(),
            min_hand_size: config.min_hand_size(),
            max_hand_size: config.max_hand_size(),
            block_len,
            hand_offsets,
            values: vec![0.0; blocks * block_len],
        }
    }

    fn row_start(&self, s: usize, h: usize) -> Option<usize> {
        if s < self.min_card_count
            || s > self.max_card_count
            || h < self.min_hand_size
            || h > self.max_hand_size
        {
            return None;
        }
        let block = (s - self.min_card_count) * self.block_len;
        Some(block + self.hand_offsets[h - self.min_hand_size])
    }

    pub(crate) fn fill_row(&mut self, s: usize, h: usize, row: &[f64]) {
        debug_assert_eq!(row.len(), h + 1);
        if let Some(start) = self.row_start(s, h) {
            self.values[start..start + h + 1].copy_from_slice(row);
        }
    }

    pub fn kind(&self) -> ProbabilityKind {
        self.kind
    }

    /// Value at (s, h, k), `None` outside the table.
    pub fn get(&self, s: usize, h: usize, k: usize) -> Option<f64> {
        if k > h {
            return None;
        }
        self.row_start(s, h).map(|start| self.values[start + k])
    }

    /// All k = 0..=h values for one (s, h).
    pub fn row(&self, s: usize, h: usize) -> Option<&[f64]> {
        self.row_start(s, h)
            .map(|start| &self.values[start..start + h + 1])
    }

    /// Rows in ascending (s, h) order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, &[f64])> + '_ {
        self.card_counts().flat_map(move |s| {
            self.hand_sizes().filter_map(move |h| self.row(s, h).map(|r| (s, h, r)))
        })
    }

    pub fn card_counts(&self) -> std::ops::RangeInclusive<usize> {
        self.min_card_count..=self.max_card_count
    }

    pub fn hand_sizes(&self) -> std::ops::RangeInclusive<usize> {
        self.min_hand_size..=self.max_hand_size
    }

    /// Number of stored probabilities.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> ProbabilityTable {
        let cfg = DeckConfiguration::new(10, 2, 3, 1, 3).unwrap();
        ProbabilityTable::zeroed(ProbabilityKind::Exact, &cfg)
    }

    #[test]
    fn layout_holds_every_cell() {
        // per s: (1+1) + (2+1) + (3+1) = 9
        let table = small_table();
        assert_eq!(table.len(), 18);
    }

    #[test]
    fn rows_do_not_overlap() {
        let mut table = small_table();
        table.fill_row(2, 2, &[0.1, 0.2, 0.3]);
        table.fill_row(3, 1, &[0.4, 0.5]);
        assert_eq!(table.row(2, 2), Some(&[0.1, 0.2, 0.3][..]));
        assert_eq!(table.row(3, 1), Some(&[0.4, 0.5][..]));
        assert_eq!(table.row(2, 3), Some(&[0.0; 4][..]));
        assert_eq!(table.get(2, 2, 1), Some(0.2));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let table = small_table();
        assert_eq!(table.get(1, 2, 0), None);
        assert_eq!(table.get(4, 2, 0), None);
        assert_eq!(table.get(2, 0, 0), None);
        assert_eq!(table.get(2, 2, 3), None);
        assert!(table.row(2, 4).is_none());
    }

    #[test]
    fn rows_iterate_in_key_order() {
        let keys: Vec<(usize, usize)> = small_table().rows().map(|(s, h, _)| (s, h)).collect();
        assert_eq!(keys, vec![(2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn kind_parses_loosely() {
        assert_eq!("AtLeast".parse::<ProbabilityKind>(), Ok(ProbabilityKind::AtLeast));
        assert_eq!("at-most".parse::<ProbabilityKind>(), Ok(ProbabilityKind::AtMost));
        assert_eq!("exact".parse::<ProbabilityKind>(), Ok(ProbabilityKind::Exact));
        assert!("sometimes".parse::<ProbabilityKind>().is_err());
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in ProbabilityKind::ALL {
            assert_eq!(kind.to_string().parse::<ProbabilityKind>(), Ok(kind));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Largest hand size the enumerator accepts: 2^24 sequences per (s, h).
pub const MAX_ENUMERABLE_HAND: usize = 24;

/// Immutable bounds for one engine: the deck size plus the inclusive ranges
/// of target-count-in-deck (`s`) and hand size (`h`) to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeckConfiguration")]
pub struct DeckConfiguration {
    deck_size: usize,
    min_card_count: usize,
    max_card_count: usize,
    min_hand_size: usize,
    max_hand_size: usize,
}

impl DeckConfiguration {
    /// Builds a configuration, rejecting bounds the engine cannot honour.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyDeck`] for a zero-card deck
    /// - [`ConfigurationError::InvertedBounds`] when a minimum exceeds its maximum
    /// - [`ConfigurationError::ExceedsDeck`] when `max_card_count` or
    ///   `max_hand_size` is larger than the deck
    /// - [`ConfigurationError::HandTooLarge`] above [`MAX_ENUMERABLE_HAND`]
    ///
    /// # Examples
    ///
    /// ```
    /// use carddraw_engine::config::DeckConfiguration;
    ///
    /// let cfg = DeckConfiguration::new(60, 1, 32, 1, 16).unwrap();
    /// assert_eq!(cfg.deck_size(), 60);
    /// assert!(DeckConfiguration::new(60, 5, 4, 1, 16).is_err());
    /// ```
    pub fn new(
        deck_size: usize,
        min_card_count: usize,
        max_card_count: usize,
        min_hand_size: usize,
        max_hand_size: usize,
    ) -> Result<Self, ConfigurationError> {
        if deck_size == 0 {
            return Err(ConfigurationError::EmptyDeck);
        }
        if min_card_count > max_card_count {
            return Err(ConfigurationError::InvertedBounds {
                min_name: "min_card_count",
                min: min_card_count,
                max_name: "max_card_count",
                max: max_card_count,
            });
        }
        if min_hand_size > max_hand_size {
            return Err(ConfigurationError::InvertedBounds {
                min_name: "min_hand_size",
                min: min_hand_size,
                max_name: "max_hand_size",
                max: max_hand_size,
            });
        }
        if max_card_count > deck_size {
            return Err(ConfigurationError::ExceedsDeck {
                name: "max_card_count",
                value: max_card_count,
                deck_size,
            });
        }
        if max_hand_size > deck_size {
            return Err(ConfigurationError::ExceedsDeck {
                name: "max_hand_size",
                value: max_hand_size,
                deck_size,
            });
        }
        if max_hand_size > MAX_ENUMERABLE_HAND {
            return Err(ConfigurationError::HandTooLarge {
                value: max_hand_size,
                limit: MAX_ENUMERABLE_HAND,
            });
        }
        Ok(Self {
            deck_size,
            min_card_count,
            max_card_count,
            min_hand_size,
            max_hand_size,
        })
    }

    /// The default bounds (1-32 target cards, hands of 1-16) for a deck size.
    pub fn standard(deck_size: usize) -> Result<Self, ConfigurationError> {
        Self::new(deck_size, 1, 32, 1, 16)
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn min_card_count(&self) -> usize {
        self.min_card_count
    }

    pub fn max_card_count(&self) -> usize {
        self.max_card_count
    }

    pub fn min_hand_size(&self) -> usize {
        self.min_hand_size
    }

    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    pub fn card_counts(&self) -> std::ops::RangeInclusive<usize> {
        self.min_card_count..=self.max_card_count
    }

    pub fn hand_sizes(&self) -> std::ops::RangeInclusive<usize> {
        self.min_hand_size..=self.max_hand_size
    }
}

/// Unchecked wire form; deserialization goes through [`DeckConfiguration::new`].
#[derive(Deserialize)]
struct RawDeckConfiguration {
    deck_size: usize,
    min_card_count: usize,
    max_card_count: usize,
    min_hand_size: usize,
    max_hand_size: usize,
}

impl TryFrom<RawDeckConfiguration> for DeckConfiguration {
    type Error = ConfigurationError;

    fn try_from(raw: RawDeckConfiguration) -> Result<Self, Self::Error> {
        DeckConfiguration::new(
            raw.deck_size,
            raw.min_card_count,
            raw.max_card_count,
            raw.min_hand_size,
            raw.max_hand_size,
        )
    }
}

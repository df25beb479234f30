//! # carddraw-engine: Card Draw Probability Tables
//!
//! Computes, for a finite shuffled deck, the probability of drawing a given
//! number of cards from a tracked category, for every (target cards in deck,
//! hand size, target cards in hand) combination within configured bounds.
//! Draws are without replacement. Results are exact-count tables plus their
//! "at least" and "at most" tails, all built eagerly and verified to sum to one.
//!
//! ## Core Modules
//!
//! - [`config`] - Immutable deck and range bounds
//! - [`draw_chance`] - Conditional chance of a hit for each (hits, misses) state
//! - [`sequence`] - Ordered draw sequences as bit patterns and their weights
//! - [`distribution`] - Exact-count distribution by bucketing sequences
//! - [`verify`] - Sum-to-one check gating every distribution
//! - [`cumulative`] - At-least / at-most tails
//! - [`table`] - Flat (s, h, k) tables and [`table::ProbabilityKind`]
//! - [`engine`] - [`engine::ProbabilityEngine`], the query facade
//! - [`deck`] / [`sampler`] - Seeded shuffles for Monte-Carlo cross-checks
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use carddraw_engine::config::DeckConfiguration;
//! use carddraw_engine::engine::ProbabilityEngine;
//! use carddraw_engine::table::ProbabilityKind;
//!
//! let engine = ProbabilityEngine::new(DeckConfiguration::new(60, 1, 8, 1, 8).unwrap()).unwrap();
//!
//! // Exactly two of eight copies among seven cards
//! let p = engine.probability(8, 7, 2, ProbabilityKind::Exact).unwrap();
//! assert!(p > 0.0 && p < 1.0);
//!
//! // Bulk access for exporters
//! let at_most = engine.table(ProbabilityKind::AtMost);
//! assert_eq!(at_most.row(8, 7).unwrap().len(), 8);
//! ```
//!
//! ## Independent Engines
//!
//! Engines hold no shared state, so one per deck size can be built in parallel:
//!
//! ```rust
//! use carddraw_engine::config::DeckConfiguration;
//! use carddraw_engine::engine::ProbabilityEngine;
//!
//! let handles: Vec<_> = [60usize, 40]
//!     .into_iter()
//!     .map(|size| {
//!         std::thread::spawn(move || {
//!             ProbabilityEngine::new(DeckConfiguration::new(size, 1, 4, 1, 7).unwrap())
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     assert!(h.join().unwrap().is_ok());
//! }
//! ```

pub mod config;
pub mod cumulative;
pub mod deck;
pub mod distribution;
pub mod draw_chance;
pub mod engine;
pub mod errors;
pub mod sampler;
pub mod sequence;
pub mod table;
pub mod verify;

pub use config::DeckConfiguration;
pub use engine::ProbabilityEngine;
pub use errors::{ConfigurationError, EngineError, QueryRangeError};
pub use table::{ProbabilityKind, ProbabilityTable};

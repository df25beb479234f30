//! Command-line argument definitions.

use carddraw_engine::table::ProbabilityKind;
use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;
use crate::export::MatchFormat;

#[derive(Parser, Debug)]
#[command(
    name = "carddraw",
    version,
    about = "Card draw probability tables for finite shuffled decks"
)]
pub struct CarddrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Range bounds shared by every command that builds an engine.
#[derive(Args, Debug, Clone, Default)]
pub struct BoundsArgs {
    /// Smallest number of target cards in the deck
    #[arg(long)]
    pub min_cards: Option<usize>,
    /// Largest number of target cards in the deck
    #[arg(long)]
    pub max_cards: Option<usize>,
    /// Smallest hand size
    #[arg(long)]
    pub min_hand: Option<usize>,
    /// Largest hand size
    #[arg(long)]
    pub max_hand: Option<usize>,
}

impl BoundsArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            min_card_count: self.min_cards,
            max_card_count: self.max_cards,
            min_hand_size: self.min_hand,
            max_hand_size: self.max_hand,
            ..Overrides::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build tables for every configured deck size and write the standard CSV sets
    Generate {
        #[arg(long)]
        outdir: Option<String>,
        /// Deck size to compute (repeatable)
        #[arg(long = "deck-size")]
        deck_sizes: Vec<usize>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Write one CSV set into an existing directory
    Export {
        #[arg(long)]
        outdir: String,
        #[arg(long)]
        prefix: String,
        #[arg(long)]
        kind: ProbabilityKind,
        #[arg(long = "match", value_enum, default_value_t = MatchFormat::Bo3)]
        match_format: MatchFormat,
        #[arg(long)]
        inverse: bool,
        #[arg(long)]
        deck_size: Option<usize>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Print a single probability
    Query {
        /// Target cards in the deck
        #[arg(long)]
        in_deck: usize,
        /// Cards in hand
        #[arg(long)]
        hand: usize,
        /// Target cards in hand
        #[arg(long)]
        in_hand: usize,
        #[arg(long, default_value = "exact")]
        kind: ProbabilityKind,
        #[arg(long)]
        deck_size: Option<usize>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Print the CSV table for one target count to stdout
    Table {
        #[arg(long)]
        in_deck: usize,
        #[arg(long, default_value = "exact")]
        kind: ProbabilityKind,
        #[arg(long = "match", value_enum, default_value_t = MatchFormat::Bo3)]
        match_format: MatchFormat,
        #[arg(long)]
        inverse: bool,
        #[arg(long)]
        deck_size: Option<usize>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Compare shuffled-deck samples against the exact distribution
    Sim {
        #[arg(long)]
        in_deck: usize,
        #[arg(long)]
        hand: usize,
        #[arg(long, default_value_t = 10_000)]
        trials: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        deck_size: Option<usize>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

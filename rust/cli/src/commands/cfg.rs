//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file, env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "deck_sizes": {
//!     "value": [60, 53],
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "deck_sizes": {
            "value": config.deck_sizes,
            "source": sources.deck_sizes,
        },
        "min_card_count": {
            "value": config.min_card_count,
            "source": sources.min_card_count,
        },
        "max_card_count": {
            "value": config.max_card_count,
            "source": sources.max_card_count,
        },
        "min_hand_size": {
            "value": config.min_hand_size,
            "source": sources.min_hand_size,
        },
        "max_hand_size": {
            "value": config.max_hand_size,
            "source": sources.max_hand_size,
        },
        "outdir": {
            "value": config.outdir,
            "source": sources.outdir,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

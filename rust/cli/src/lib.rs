//! # Carddraw CLI Library
//!
//! Command-line front end for the card draw probability engine. It builds
//! per-deck probability tables and writes them as CSV files, answers single
//! queries, and cross-checks the enumeration against shuffled-deck samples.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["carddraw", "generate", "--outdir", "mtg_out"];
//! let code = carddraw_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `generate`: Build tables for every configured deck size and write all CSV sets
//! - `export`: Write one CSV set into an existing directory
//! - `query`: Print a single probability
//! - `table`: Print the CSV table for one target count
//! - `sim`: Compare Monte-Carlo samples with the exact distribution
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod export;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{CarddrawCli, Commands};
use commands::{
    handle_cfg_command, handle_export_command, handle_generate_command, handle_query_command,
    handle_sim_command, handle_table_command,
};

pub use error::CliError;

/// Below this many trials the sampled frequencies are too noisy to compare.
const LOW_TRIAL_COUNT: u64 = 1_000;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `3` when the engine reports a
/// defect (a distribution that does not sum to one)
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec![
///     "carddraw", "query", "--in-deck", "4", "--hand", "7", "--in-hand", "1",
///     "--max-cards", "4", "--max-hand", "7",
/// ];
/// let mut out = Vec::new();
/// let code = carddraw_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("0.3362"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["generate", "export", "query", "table", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = CarddrawCli::try_parse_from(&argv);
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Carddraw probability tables").is_err()
                        || writeln!(err, "Usage: carddraw <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: carddraw --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Generate {
            outdir,
            deck_sizes,
            bounds,
        } => handle_generate_command(outdir, deck_sizes, &bounds, out),
        Commands::Export {
            outdir,
            prefix,
            kind,
            match_format,
            inverse,
            deck_size,
            bounds,
        } => handle_export_command(
            &outdir,
            &prefix,
            kind,
            match_format,
            inverse,
            deck_size,
            &bounds,
            out,
        ),
        Commands::Query {
            in_deck,
            hand,
            in_hand,
            kind,
            deck_size,
            bounds,
        } => handle_query_command(in_deck, hand, in_hand, kind, deck_size, &bounds, out),
        Commands::Table {
            in_deck,
            kind,
            match_format,
            inverse,
            deck_size,
            bounds,
        } => handle_table_command(
            in_deck,
            kind,
            match_format,
            inverse,
            deck_size,
            &bounds,
            out,
        ),
        Commands::Sim {
            in_deck,
            hand,
            trials,
            seed,
            deck_size,
        } => {
            if trials > 0 && trials < LOW_TRIAL_COUNT {
                let _ = ui::display_warning(
                    err,
                    &format!("{} trials is a small sample; expect large deviations", trials),
                );
            }
            handle_sim_command(in_deck, hand, trials, seed, deck_size, out)
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let code = exit_code::for_error(&e);
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            code
        }
    }
}

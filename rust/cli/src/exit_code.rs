//! Exit code constants for the CLI application.
//!
//! This module centralizes all exit codes used by the CLI, making them
//! easier to maintain and ensuring consistency across commands.

use crate::error::CliError;

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code (bad input, configuration, I/O).
pub const ERROR: i32 = 2;

/// The engine detected an internal inconsistency while building tables.
pub const DEFECT: i32 = 3;

/// Exit code for a failed command.
pub fn for_error(e: &CliError) -> i32 {
    match e {
        CliError::Defect(_) => DEFECT,
        _ => ERROR,
    }
}

//! # UI Utilities
//!
//! Diagnostics printed by the command-line host.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt::Display,
    io::{IsTerminal, Write},
};

use owo_colors::OwoColorize;

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints an error with red prefix.
pub fn print_error(err: impl Display) {
    eprintln!("{} {err:#}", "error:".red().bold());
}

/// Checks whether a question can be asked: keys are read from stdin.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Ends the line an interrupted question was left on, so the shell prompt
/// does not start on it.
pub fn finish_interrupted(out: &mut impl Write) {
    let _ = writeln!(out);
    let _ = out.flush();
}

// src/core/commands/helpers.rs

//! Small helpers shared by command implementations.

use crate::tui::ClientWriter;
use once_cell::sync::Lazy;
use regex::Regex;

static RECORDING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("recording name pattern is valid"));

/// Zero-argument validation: emits exactly one diagnostic line when any
/// argument is present.
pub fn expect_no_args(cw: &ClientWriter, args: &[String]) -> bool {
    if !args.is_empty() {
        cw.println("No arguments expected");
        return false;
    }
    true
}

/// Whether `name` is acceptable as a recording name.
pub fn is_valid_recording_name(name: &str) -> bool {
    RECORDING_NAME.is_match(name)
}

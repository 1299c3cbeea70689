//! Command-line interface.

pub mod commands;
pub mod output;
pub mod table;
pub mod types;

pub use types::{Cli, Commands};

use console::style;
use thiserror::Error;

use crate::infrastructure::logging::SecretScrubber;

/// Command failure whose details are already part of the command's output.
///
/// In JSON mode nothing more is printed, so stdout stays one document.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AlreadyReported(pub String);

/// Print `err` for the operator and exit with status 1.
///
/// The full error chain is shown, with credentials scrubbed.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    let message = SecretScrubber::new().scrub(&format!("{err:#}"));

    if !json_mode {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    } else if !err.is::<AlreadyReported>() {
        let body = serde_json::json!({ "success": false, "error": message });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    }

    std::process::exit(1)
}

//! # Example CLI
//!
//! Prints the build-time version, reports which of the switches `-a`, `-b`
//! and `-c` were supplied, and echoes three fixed clamp results.
//!
//! ## Example
//! ```rust
//! let mut out = Vec::new();
//! example_cli::run(["example", "-b"], &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Option 'b' is set"));
//! assert!(text.ends_with("Clamp: 5\nClamp: 7\nClamp: 3\n"));
//! ```

pub mod args;
pub mod clamp;
pub mod error;
pub mod settings;

pub use crate::args::{Cli, FlagSet};
pub use crate::error::{CliError, CliErrorExt};
pub use crate::settings::Settings;

use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Version stamped by the build script.
pub const VERSION: &str = env!("EXAMPLE_VERSION");

/// Parses `args` (binary name first) and writes the report to `out`.
///
/// # Errors
/// Returns [`CliError::Usage`] for arguments outside the option schema and
/// [`CliError::Output`] when `out` cannot be written.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    // Nothing, not even the version line, is written when parsing fails.
    let cli = Cli::try_parse_from(args)?;
    debug!(flags = ?cli.flags, "Parsed command-line flags");
    render(&cli.flags, out)
}

/// Writes the version line, one line per supplied switch, and the clamp results.
///
/// # Errors
/// Returns [`CliError::Output`] when `out` cannot be written.
pub fn render<W: Write>(flags: &FlagSet, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "This project's version is: {VERSION}").context("Failed to write version")?;

    for name in flags.set() {
        writeln!(out, "Option '{name}' is set").context("Failed to write flags")?;
    }

    for call in clamp::DEMO_CLAMPS {
        let result = call.evaluate();
        debug!(value = call.value, low = call.low, high = call.high, result, "Clamp evaluated");
        writeln!(out, "Clamp: {result}").context("Failed to write clamps")?;
    }

    out.flush().context("Failed to flush output")
}

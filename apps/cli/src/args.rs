//! # CLI Argument Definitions
//!
//! The option schema of the `example` binary: three independent boolean
//! switches, each available in short and long form.

use clap::{Args, Parser};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "example")]
#[command(version = crate::VERSION)]
#[command(about = "Testing dependency consumption")]
pub struct Cli {
    #[command(flatten)]
    pub flags: FlagSet,
}

/// Presence of the recognized switches. Every switch defaults to `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Args)]
pub struct FlagSet {
    /// Option A
    #[arg(short = 'a', long = "option-a")]
    pub a: bool,

    /// Option B
    #[arg(short = 'b', long = "option-b")]
    pub b: bool,

    /// Option C
    #[arg(short = 'c', long = "option-c")]
    pub c: bool,
}

impl FlagSet {
    /// Registered option names in reporting order.
    pub const NAMES: [&'static str; 3] = ["a", "b", "c"];

    /// Looks up an option by name. Unknown names yield `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "a" => Some(self.a),
            "b" => Some(self.b),
            "c" => Some(self.c),
            _ => None,
        }
    }

    /// Names of the options that were supplied, in the order `a`, `b`, `c`.
    pub fn set(&self) -> impl Iterator<Item = &'static str> + '_ {
        Self::NAMES.into_iter().filter(|name| self.get(name).unwrap_or(false))
    }
}

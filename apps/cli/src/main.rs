use clap::Parser;
use example_cli::{Cli, Settings, VERSION};
use std::io;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    // Arguments come first: usage errors, --help and --version never depend on settings.
    // clap prints help/version to stdout with status 0, real usage errors to stderr with 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    let mut stderr = io::stderr();
    let settings = Settings::load_or_default(None, &mut stderr);
    let _log = settings.log.install_or_default(env!("CARGO_PKG_NAME"), &mut stderr);

    info!(version = VERSION, "Starting");
    debug!(flags = ?cli.flags, "Parsed command-line flags");

    example_cli::render(&cli.flags, &mut io::stdout().lock())?;

    Ok(())
}

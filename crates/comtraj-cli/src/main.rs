mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use comtraj::core::io::{load_trajectory, save_trajectory};
use comtraj::core::reduce::selection::Selection;
use comtraj::workflows;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("comtraj v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    info!("Loading trajectory from '{}'.", cli.input.display());
    let trajectory = load_trajectory(&cli.input)?;

    let reduced = workflows::reduce::run(&trajectory, &Selection::com_representatives())?;

    info!("Writing reduced trajectory to '{}'.", cli.output.display());
    save_trajectory(&reduced, &cli.output)?;

    info!("✅ Command completed successfully.");
    Ok(())
}

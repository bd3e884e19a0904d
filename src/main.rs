//! upload-reconciler CLI
//!
//! Usage: upload-reconciler <COMMAND>
//!
//! Commands:
//!   inventory   Count the files under the upload directory
//!   references  Count the distinct files content records reference
//!   reconcile   Move unreferenced uploads into the backup directory

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use logging::Verbosity;

fn main() {
    let cli = Cli::parse();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref(), cli.document_root.as_deref())?;

    match &cli.command {
        Commands::Inventory => commands::inventory::cmd_inventory(&config, cli.json),
        Commands::References => commands::references::cmd_references(&config, cli.json),
        Commands::Reconcile {
            dry_run,
            yes,
            naming,
        } => commands::reconcile::cmd_reconcile(&config, *dry_run, *yes, *naming, cli.json),
    }
}

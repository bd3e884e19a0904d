use std::path::PathBuf;

use clap::{Parser, Subcommand};
use upload_reconciler::NamingPolicy;

/// upload-reconciler - quarantine upload files no content record references
#[derive(Parser, Debug)]
#[command(name = "upload-reconciler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./reconciler.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Document root; overrides config and environment
    #[arg(long, global = true, value_name = "DIR")]
    pub document_root: Option<PathBuf>,

    /// Print one JSON object instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the files under the upload directory
    #[command(alias = "inventory-count")]
    Inventory,

    /// Count the distinct files content records reference
    #[command(alias = "reference-count")]
    References,

    /// Move unreferenced uploads into the backup directory
    Reconcile {
        /// Show what would be moved without moving anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Backup file naming for this run
        #[arg(long, value_enum)]
        naming: Option<NamingPolicy>,
    },
}

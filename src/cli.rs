use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "chimera clan-management backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Append a snapshot of the latest roster as a rollback point
    Snapshot,
    /// Render the latest roster to a PNG image
    Export {
        /// Output file path
        #[arg(short, long, default_value = "shadow_war.png")]
        output: PathBuf,
        /// Export even when players have not confirmed readiness
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Import clan members from a roster CSV file
    Import {
        /// CSV file with name,class columns
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print a live countdown to the scheduled war time
    Countdown,
    /// Create the database schema
    Setup,
}

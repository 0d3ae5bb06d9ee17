use anyhow::Result;

use chimera_clan::cli::Command;
use chimera_clan::{
    handle_countdown, handle_export, handle_import, handle_serve, handle_setup, handle_snapshot,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Snapshot => handle_snapshot(),
        Command::Export { output, force } => handle_export(output, *force),
        Command::Import { file } => handle_import(file),
        Command::Countdown => handle_countdown(),
        Command::Setup => handle_setup(),
    }
}

pub mod api;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod database;
pub mod domain;
pub mod export;
pub mod importer;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::countdown::CountdownTicker;
use crate::database::{DbPool, SqliteSnapshotRepository};
use crate::domain::SnapshotRepository;
use crate::services::export::ExportService;
use crate::services::import::ImportService;
use crate::services::server::ServerService;
use crate::services::snapshot_job::SnapshotJobService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_snapshot() -> Result<()> {
    let pool = open_database()?;
    let repository = SqliteSnapshotRepository::new(pool);
    let service = SnapshotJobService::new(&repository);
    service.run()
}

pub fn handle_export(output: &Path, force: bool) -> Result<()> {
    let pool = open_database()?;
    let repository = SqliteSnapshotRepository::new(pool);
    let service = ExportService::new(AppConfig::new());
    service.run(&repository, output, force)
}

pub fn handle_import(file: &Path) -> Result<()> {
    let pool = open_database()?;
    let mut conn = database::get_connection(&pool)?;
    let service = ImportService::new();
    service.run(&mut conn, file)
}

pub fn handle_countdown() -> Result<()> {
    let pool = open_database()?;
    let repository = SqliteSnapshotRepository::new(pool);
    let war_time = repository.latest()?.and_then(|s| s.war.war_time);

    if war_time.is_none() {
        println!("{}", "No war is scheduled.".yellow());
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut ticker = CountdownTicker::spawn(war_time);
        if let Some(display) = ticker.display() {
            println!("{}", display.bold());
        }
        while let Some(display) = ticker.changed().await {
            if display == countdown::WAR_STARTED {
                println!("{}", display.green().bold());
                break;
            }
            println!("{}", display.bold());
        }
        Ok(())
    })
}

pub fn handle_setup() -> Result<()> {
    open_database()?;
    println!("{}", "Database schema ready.".green());
    Ok(())
}

fn open_database() -> Result<DbPool> {
    let pool = database::create_pool(&database::database_path())?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::init_schema(&mut conn)?;
    Ok(pool)
}

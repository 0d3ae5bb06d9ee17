use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::database::{self, DbConn};
use crate::importer;

pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Load a roster CSV and upsert every row into the members table
    pub fn run(&self, conn: &mut DbConn, file: &Path) -> Result<()> {
        let records = importer::read_member_records(file)?;
        info!("Parsed {} roster rows from {}", records.len(), file.display());

        let mut inserted = 0;
        let mut updated = 0;
        for record in &records {
            let (_, is_new) =
                database::members::upsert_member(conn, record.name.trim(), &record.class)?;
            if is_new {
                inserted += 1;
            } else {
                updated += 1;
            }
        }

        println!(
            "{} {} members imported ({} new, {} updated)",
            "done:".green().bold(),
            records.len(),
            inserted,
            updated
        );
        Ok(())
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}

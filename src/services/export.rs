use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{ShadowWar, SnapshotRepository};
use crate::export::{pending_players, PngRasterizer, RosterRasterizer};

pub struct ExportService {
    config: AppConfig,
}

impl ExportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render the latest roster to a PNG file.
    ///
    /// Players that have not confirmed readiness block the export unless
    /// `force` is set; once rendering starts it is unconditional.
    pub fn run(
        &self,
        repository: &dyn SnapshotRepository,
        output: &Path,
        force: bool,
    ) -> Result<()> {
        let war = match repository.latest()? {
            Some(snapshot) => snapshot.war,
            None => ShadowWar::empty(&self.config.war),
        };

        let pending = pending_players(&war);
        if !pending.is_empty() {
            if !force {
                println!(
                    "{} {} player(s) have not confirmed readiness:",
                    "blocked:".red().bold(),
                    pending.len()
                );
                for name in &pending {
                    println!("  - {}", name.yellow());
                }
                anyhow::bail!("export blocked by unready players (pass --force to override)");
            }
            println!(
                "{} exporting with {} unready player(s)",
                "warning:".yellow().bold(),
                pending.len()
            );
        }

        let rasterizer = PngRasterizer::new(self.config.export.clone());
        let bytes = rasterizer.rasterize(&war)?;
        std::fs::write(output, bytes)
            .with_context(|| format!("Failed to write image to {}", output.display()))?;

        info!("Roster image written to {}", output.display());
        println!("{} {}", "exported:".green().bold(), output.display());
        Ok(())
    }
}

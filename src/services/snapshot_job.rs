use anyhow::Result;
use log::info;

use crate::domain::SnapshotRepository;

/// Weekly cron entrypoint: re-save the latest roster so a rollback point
/// exists even when nobody edited that week
pub struct SnapshotJobService<'a> {
    repository: &'a dyn SnapshotRepository,
}

impl<'a> SnapshotJobService<'a> {
    pub fn new(repository: &'a dyn SnapshotRepository) -> Self {
        Self { repository }
    }

    pub fn run(&self) -> Result<()> {
        match self.repository.latest()? {
            Some(snapshot) => {
                let saved = self.repository.save(&snapshot.war)?;
                info!(
                    "Weekly snapshot saved (id {}, from snapshot {})",
                    saved.id, snapshot.id
                );
            }
            None => {
                info!("No snapshot data available to save");
            }
        }

        Ok(())
    }
}

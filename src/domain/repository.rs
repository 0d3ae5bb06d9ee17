use chrono::NaiveDate;

use super::errors::RosterError;
use super::models::{ShadowWar, Snapshot};

/// Durable append-only storage for shadow war snapshots.
///
/// Saving never mutates earlier snapshots; rollback is implemented by
/// re-saving an older tree as the new latest.
pub trait SnapshotRepository {
    /// Append a snapshot stamped with the current time
    fn save(&self, war: &ShadowWar) -> Result<Snapshot, RosterError>;

    /// The snapshot with the greatest timestamp, if any exist
    fn latest(&self) -> Result<Option<Snapshot>, RosterError>;

    /// The latest snapshot created on the given calendar day (UTC)
    fn by_date(&self, date: NaiveDate) -> Result<Option<Snapshot>, RosterError>;
}

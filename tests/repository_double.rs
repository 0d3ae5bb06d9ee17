//! The snapshot repository is an injected trait; these tests drive the
//! weekly job through in-memory doubles.

use std::cell::RefCell;

use chrono::{NaiveDate, Utc};
use chimera_clan::config::settings::WarSettings;
use chimera_clan::domain::{
    reassignment, MatchRef, Player, RosterError, ShadowWar, Snapshot, SnapshotRepository,
};
use chimera_clan::services::snapshot_job::SnapshotJobService;

#[derive(Default)]
struct InMemoryRepository {
    snapshots: RefCell<Vec<Snapshot>>,
}

impl SnapshotRepository for InMemoryRepository {
    fn save(&self, war: &ShadowWar) -> Result<Snapshot, RosterError> {
        let mut snapshots = self.snapshots.borrow_mut();
        let snapshot = Snapshot {
            id: snapshots.len() as i64 + 1,
            created_at: Utc::now(),
            war: war.clone(),
        };
        snapshots.push(snapshot.clone());
        Ok(snapshot)
    }

    fn latest(&self) -> Result<Option<Snapshot>, RosterError> {
        Ok(self.snapshots.borrow().last().cloned())
    }

    fn by_date(&self, date: NaiveDate) -> Result<Option<Snapshot>, RosterError> {
        Ok(self
            .snapshots
            .borrow()
            .iter()
            .rev()
            .find(|s| s.created_at.date_naive() == date)
            .cloned())
    }
}

struct UnreachableRepository;

impl SnapshotRepository for UnreachableRepository {
    fn save(&self, _war: &ShadowWar) -> Result<Snapshot, RosterError> {
        Err(RosterError::Persistence("store offline".to_string()))
    }

    fn latest(&self) -> Result<Option<Snapshot>, RosterError> {
        Err(RosterError::Persistence("store offline".to_string()))
    }

    fn by_date(&self, _date: NaiveDate) -> Result<Option<Snapshot>, RosterError> {
        Err(RosterError::Persistence("store offline".to_string()))
    }
}

fn sample_war() -> ShadowWar {
    let mut war = ShadowWar::empty(&WarSettings::default());
    reassignment::add_player(&mut war, MatchRef::new(0, 0), Player::new("Driftie", "Barbarian"))
        .unwrap();
    war
}

#[test]
fn weekly_job_resaves_latest_through_the_trait() {
    let repository = InMemoryRepository::default();
    repository.save(&sample_war()).unwrap();

    SnapshotJobService::new(&repository).run().unwrap();

    let snapshots = repository.snapshots.borrow();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].war, snapshots[1].war);
}

#[test]
fn weekly_job_skips_an_empty_store() {
    let repository = InMemoryRepository::default();
    SnapshotJobService::new(&repository).run().unwrap();
    assert!(repository.snapshots.borrow().is_empty());
}

#[test]
fn persistence_failures_propagate_to_the_caller() {
    let result = SnapshotJobService::new(&UnreachableRepository).run();
    assert!(result.is_err());
}

#[test]
fn by_date_searches_newest_first() {
    let repository = InMemoryRepository::default();
    let first = sample_war();
    let mut second = sample_war();
    reassignment::toggle_ready(&mut second, MatchRef::new(0, 0), 0);

    repository.save(&first).unwrap();
    repository.save(&second).unwrap();

    let today = Utc::now().date_naive();
    let found = repository.by_date(today).unwrap().unwrap();
    assert_eq!(found.war, second);
}

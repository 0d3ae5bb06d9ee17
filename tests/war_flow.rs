//! End-to-end coverage of the snapshot store and the roster flows on top
//! of a real SQLite file.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use chimera_clan::config::settings::WarSettings;
use chimera_clan::database::{self, DbPool, SqliteSnapshotRepository};
use chimera_clan::domain::{reassignment, MatchRef, Player, ShadowWar, SnapshotRepository};
use chimera_clan::services::snapshot_job::SnapshotJobService;

fn temp_database(name: &str) -> (DbPool, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "chimera_clan_test_{}_{}.db",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);

    let pool = database::create_pool(path.to_str().unwrap()).unwrap();
    let mut conn = database::get_connection(&pool).unwrap();
    database::setup::init_schema(&mut conn).unwrap();
    (pool, path)
}

fn sample_war() -> ShadowWar {
    let mut war = ShadowWar::empty(&WarSettings::default());
    reassignment::add_player(&mut war, MatchRef::new(0, 0), Player::new("5ly", "Tempest")).unwrap();
    reassignment::add_player(&mut war, MatchRef::new(1, 2), Player::new("Corol", "Blood Knight"))
        .unwrap();
    war.war_time = Some(Utc::now() + Duration::hours(2));
    war
}

fn snapshot_count(pool: &DbPool) -> i64 {
    let conn = database::get_connection(pool).unwrap();
    conn.query_row("SELECT COUNT(*) FROM snapshots", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn save_then_latest_round_trips() {
    let (pool, path) = temp_database("round_trip");
    let mut conn = database::get_connection(&pool).unwrap();

    let war = sample_war();
    let saved = database::snapshots::insert_snapshot(&mut conn, &war).unwrap();
    let latest = database::snapshots::latest_snapshot(&mut conn).unwrap().unwrap();

    assert_eq!(latest.id, saved.id);
    assert_eq!(latest.war, war);

    let _ = std::fs::remove_file(path);
}

#[test]
fn latest_follows_insertion_order() {
    let (pool, path) = temp_database("latest_order");
    let mut conn = database::get_connection(&pool).unwrap();

    let first = sample_war();
    let mut second = sample_war();
    reassignment::add_player(&mut second, MatchRef::new(3, 0), Player::new("Fudu", "Barbarian"))
        .unwrap();

    database::snapshots::insert_snapshot(&mut conn, &first).unwrap();
    database::snapshots::insert_snapshot(&mut conn, &second).unwrap();

    let latest = database::snapshots::latest_snapshot(&mut conn).unwrap().unwrap();
    assert!(latest.war.contains_player("Fudu"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn by_date_is_none_for_a_day_without_snapshots() {
    let (pool, path) = temp_database("by_date");
    let mut conn = database::get_connection(&pool).unwrap();

    database::snapshots::insert_snapshot(&mut conn, &sample_war()).unwrap();

    let today = Utc::now().date_naive();
    assert!(database::snapshots::snapshot_by_date(&mut conn, today)
        .unwrap()
        .is_some());

    let last_month = today - Duration::days(30);
    assert!(database::snapshots::snapshot_by_date(&mut conn, last_month)
        .unwrap()
        .is_none());

    let _ = std::fs::remove_file(path);
}

#[test]
fn empty_store_has_no_latest() {
    let (pool, path) = temp_database("empty_latest");
    let mut conn = database::get_connection(&pool).unwrap();

    assert!(database::snapshots::latest_snapshot(&mut conn).unwrap().is_none());

    let _ = std::fs::remove_file(path);
}

#[test]
fn rollback_appends_instead_of_deleting() {
    let (pool, path) = temp_database("rollback");
    let repository = SqliteSnapshotRepository::new(pool.clone());

    let original = sample_war();
    let mut edited = original.clone();
    reassignment::move_player(&mut edited, MatchRef::new(0, 0), 0, MatchRef::new(0, 1), 0)
        .unwrap();

    let first = repository.save(&original).unwrap();
    repository.save(&edited).unwrap();

    // roll back by re-saving the older tree as the new latest
    repository.save(&first.war).unwrap();

    let latest = repository.latest().unwrap().unwrap();
    assert_eq!(latest.war, original);
    assert_eq!(snapshot_count(&pool), 3);

    let _ = std::fs::remove_file(path);
}

#[test]
fn weekly_job_duplicates_the_latest_snapshot() {
    let (pool, path) = temp_database("weekly_job");
    let repository = SqliteSnapshotRepository::new(pool.clone());

    // nothing saved yet: the job is a quiet no-op
    SnapshotJobService::new(&repository).run().unwrap();
    assert_eq!(snapshot_count(&pool), 0);

    let war = sample_war();
    repository.save(&war).unwrap();
    SnapshotJobService::new(&repository).run().unwrap();

    assert_eq!(snapshot_count(&pool), 2);
    assert_eq!(repository.latest().unwrap().unwrap().war, war);

    let _ = std::fs::remove_file(path);
}

pub mod connection;
pub mod members;
pub mod models;
pub mod setup;
pub mod snapshots;
pub mod towers;

pub use connection::{create_pool, database_path, get_connection, DbConn, DbPool};
pub use snapshots::SqliteSnapshotRepository;

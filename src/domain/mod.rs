pub mod clan;
pub mod errors;
pub mod models;
pub mod reassignment;
pub mod repository;
pub mod roster;

pub use clan::{ContestInfo, Member, Tower};
pub use errors::RosterError;
pub use models::{MatchRef, Player, ShadowWar, Snapshot, WarMatch, WarType};
pub use repository::SnapshotRepository;
pub use roster::RosterStore;

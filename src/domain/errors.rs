use thiserror::Error;

/// Failures surfaced by the roster core and the snapshot store
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("snapshot store failure: {0}")]
    Persistence(String),

    #[error("snapshot does not match the expected war layout: {0}")]
    MalformedSnapshot(String),

    #[error("player '{0}' is already assigned to a match")]
    DuplicatePlayer(String),

    #[error("player '{0}' is marked ready and cannot be moved")]
    Locked(String),
}

pub mod export;
pub mod import;
pub mod server;
pub mod snapshot_job;

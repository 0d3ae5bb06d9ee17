pub mod renderer;

pub use renderer::{pending_players, PngRasterizer, RosterRasterizer};

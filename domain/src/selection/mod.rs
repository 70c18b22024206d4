//! Selection state and the level/track/subject catalogs

pub mod level;
pub mod state;

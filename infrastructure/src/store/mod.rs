//! Document store adapters

pub mod memory;
pub mod seed;

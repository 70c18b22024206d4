//! Configuration file support

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileBehaviorConfig, FileConfig, FileDataConfig, FileIdentityConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;

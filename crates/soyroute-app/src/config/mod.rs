//! Configuration file parsing for soyroute
//!
//! Supports `<config dir>/soyroute/config.toml` with behavior, narrator and
//! ui sections.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, default_data_dir, init_config_dir, load_settings};
pub use types::*;

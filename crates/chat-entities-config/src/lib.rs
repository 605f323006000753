//! Configuration and file locations for chat-entities tools
//!
//! This crate provides:
//! - File path utilities for config, snapshot and log files
//! - Configuration file lookup (TOML)
//! - Store configuration (StoreConfig)

pub mod config_file;
pub mod paths;
pub mod store_config;

pub use config_file::load_config_file;
pub use store_config::StoreConfig;

//! Configuration and directory management for school-desk
//!
//! This crate provides:
//! - Application directory paths
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

/// Backend used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};

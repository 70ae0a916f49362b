//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/school-desk/ on Linux)

use anyhow::Context;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("school-desk-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        school_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Map a `RUST_LOG` value to a level, unknown values fall back to info
fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging
///
/// Returns the path of the log file.
pub fn init() -> anyhow::Result<PathBuf> {
    let log_file = log_file_path();

    let level = std::env::var("RUST_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Debug);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {:?}", log_file))?;
    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_name() {
        let path = log_file_path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("school-desk-"));
        assert!(name.ends_with(".log"));
    }
}

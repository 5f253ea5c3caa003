//! CLI argument validation functions
//!
//! Custom validation for CLI arguments beyond what clap checks itself.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate an event source: `-` for stdin or an existing file
pub fn validate_event_source(source: &str) -> Result<PathBuf, String> {
    if source == "-" {
        return Ok(PathBuf::from(source));
    }

    let path = PathBuf::from(source);
    if !path.is_file() {
        return Err(format!("Event file does not exist: '{}'", source));
    }

    Ok(path)
}

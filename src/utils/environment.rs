use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable consulted when no log directory argument is given
pub const LOG_DIR_ENV: &str = "DASLOG_DIR";

/// Get the default Daslog directory (~/Documents/CozmoLogs)
pub fn default_log_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().with_context(|| {
        format!(
            "Could not determine the home directory; pass a log directory or set {}",
            LOG_DIR_ENV
        )
    })?;
    Ok(home.join("Documents").join("CozmoLogs"))
}

/// Use the explicitly configured directory, falling back to [`default_log_dir`]
pub fn resolve_log_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => default_log_dir(),
    }
}

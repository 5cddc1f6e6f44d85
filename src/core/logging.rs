//! Logging initialization
//!
//! Console + file logging through `simplelog`; library code only uses the
//! `log` facade.

use anyhow::Result;
use simplelog::*;
use std::fs::File;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
/// * `verbose` - Log at `Debug` instead of `Info`
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger is already set
pub fn init_logger(log_file_path: &str, verbose: bool) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Log the effective configuration at startup.
pub fn log_configuration() {
    use crate::core::config;

    log::info!("Music library: {}", *config::MUSIC_LIB_ROOT);
    log::info!("Working directory: {}", config::TEMP_FILES_DIR.display());
    log::debug!("ffmpeg: {}, yt-dlp: {}", *config::FFMPEG_BIN, *config::YTDL_BIN);

    if !std::path::Path::new(config::MUSIC_LIB_ROOT.as_str()).is_dir() {
        log::warn!("Music library directory does not exist yet and will be created");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_creates_log_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A logger may already be installed by another test; either way the file is created.
        let _ = init_logger(path, false);
        assert!(temp_file.path().exists());
    }

    #[test]
    fn test_init_logger_bad_path() {
        assert!(init_logger("/nonexistent-dir/doralbum/app.log", false).is_err());
    }
}

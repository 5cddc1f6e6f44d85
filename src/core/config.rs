use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Read once from the environment, after `.env` is loaded.

/// Root of the local music library
/// Read from MUSIC_LIB_ROOT environment variable
/// Default: ~/Music
/// Supports tilde (~) expansion for home directory
pub static MUSIC_LIB_ROOT: Lazy<String> = Lazy::new(|| {
    let raw = env::var("MUSIC_LIB_ROOT").unwrap_or_else(|_| "~/Music".to_string());
    shellexpand::tilde(&raw).to_string()
});

/// ffmpeg binary used for splitting
/// Read from MUSIC_FFMPEG environment variable or defaults to "ffmpeg"
pub static FFMPEG_BIN: Lazy<String> = Lazy::new(|| env::var("MUSIC_FFMPEG").unwrap_or_else(|_| "ffmpeg".to_string()));

/// Cached yt-dlp binary path
/// Read from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: doralbum.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "doralbum.log".to_string()));

/// Working directory for downloads and freshly split tracks
/// Read from TEMP_FILES_DIR environment variable
/// Defaults to the system temp directory, supports tilde (~) expansion
pub static TEMP_FILES_DIR: Lazy<PathBuf> = Lazy::new(|| match env::var("TEMP_FILES_DIR") {
    Ok(dir) => PathBuf::from(shellexpand::tilde(&dir).to_string()),
    Err(_) => env::temp_dir(),
});

/// Download configuration
pub mod download {
    use super::Duration;

    /// Timeout for a full yt-dlp audio download (in seconds)
    pub const YTDLP_TIMEOUT_SECS: u64 = 900; // 15 minutes, full albums are long

    /// Timeout for yt-dlp metadata queries (in seconds)
    pub const METADATA_TIMEOUT_SECS: u64 = 30;

    /// yt-dlp download timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(YTDLP_TIMEOUT_SECS)
    }

    /// yt-dlp metadata timeout duration
    pub fn metadata_timeout() -> Duration {
        Duration::from_secs(METADATA_TIMEOUT_SECS)
    }
}

/// Segmentation configuration
pub mod segmentation {
    use super::Duration;

    /// Timeout for a single ffmpeg split (in seconds)
    pub const FFMPEG_TIMEOUT_SECS: u64 = 120;

    /// ffmpeg split timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(FFMPEG_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeouts() {
        assert_eq!(download::timeout(), Duration::from_secs(900));
        assert_eq!(download::metadata_timeout(), Duration::from_secs(30));
        assert_eq!(segmentation::timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_music_lib_root_is_expanded() {
        assert!(!MUSIC_LIB_ROOT.starts_with('~'));
    }
}

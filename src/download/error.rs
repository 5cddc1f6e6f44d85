use thiserror::Error;

/// Structured error type for download operations.
///
/// Categorized so the CLI can tell a bad link apart from a flaky network
/// or a broken yt-dlp install.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Not an http(s) URL
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),
    /// Video is private, removed, or region locked
    #[error("{0}")]
    Unavailable(String),
    /// Connection problems (timeouts, DNS, sockets)
    #[error("{0}")]
    Network(String),
    /// yt-dlp specific failures (bad exit code, blocked request)
    #[error("{0}")]
    YtDlp(String),
    /// Expected file not found after the download
    #[error("{0}")]
    FileNotFound(String),
    /// Download timed out
    #[error("{0}")]
    Timeout(String),
    /// Process execution failure (spawn)
    #[error("{0}")]
    Process(String),
}

impl DownloadError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::InvalidUrl(_) => "invalid_url",
            DownloadError::Unavailable(_) => "unavailable",
            DownloadError::Network(_) => "network",
            DownloadError::YtDlp(_) => "ytdlp",
            DownloadError::FileNotFound(_) => "file_not_found",
            DownloadError::Timeout(_) => "timeout",
            DownloadError::Process(_) => "process",
        }
    }
}

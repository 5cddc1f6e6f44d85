use thiserror::Error;

use crate::download::DownloadError;
use crate::metadata::TagError;
use crate::segmentation::{PlanError, SplitError};

/// Centralized error types for the application
///
/// Every stage of album creation converts into this enum, so the pipeline
/// and the CLI can use `?` throughout.
///
/// # Example
///
/// ```no_run
/// use doralbum::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Track list that doesn't parse or doesn't make a valid plan
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Download/yt-dlp errors
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// ffmpeg splitting errors
    #[error("Segmentation error: {0}")]
    Split(#[from] SplitError),

    /// Tag writing errors
    #[error("Tagging error: {0}")]
    Tag(#[from] TagError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anyhow errors (for general error handling)
    #[error("Application error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

//! yt-dlp failure analysis
//!
//! Maps yt-dlp's stderr to an error category and a message a user can act on.

use super::DownloadError;

/// yt-dlp error categories
#[derive(Debug, Clone, PartialEq)]
pub enum YtDlpErrorType {
    /// YouTube detected automated requests
    BotDetection,
    /// Video is unavailable (private, removed, region locked)
    VideoUnavailable,
    /// Network problems (timeouts, connection)
    NetworkError,
    /// Anything else
    Unknown,
}

/// Analyzes yt-dlp stderr and determines the error type
pub fn analyze_ytdlp_error(stderr: &str) -> YtDlpErrorType {
    let stderr_lower = stderr.to_lowercase();

    if stderr_lower.contains("sign in to confirm you're not a bot")
        || stderr_lower.contains("http error 403")
        || stderr_lower.contains("unable to extract")
        || stderr_lower.contains("signature extraction failed")
    {
        return YtDlpErrorType::BotDetection;
    }

    if stderr_lower.contains("private video")
        || stderr_lower.contains("video unavailable")
        || stderr_lower.contains("this video is unavailable")
        || stderr_lower.contains("this video is not available")
        || stderr_lower.contains("video is private")
        || stderr_lower.contains("video has been removed")
        || stderr_lower.contains("this video does not exist")
        || stderr_lower.contains("is not a valid url")
        || stderr_lower.contains("unsupported url")
    {
        return YtDlpErrorType::VideoUnavailable;
    }

    if stderr_lower.contains("timed out")
        || stderr_lower.contains("connection")
        || stderr_lower.contains("network")
        || stderr_lower.contains("socket")
        || stderr_lower.contains("dns")
        || stderr_lower.contains("failed to connect")
    {
        return YtDlpErrorType::NetworkError;
    }

    YtDlpErrorType::Unknown
}

/// User-facing message for an error type
pub fn get_error_message(error_type: &YtDlpErrorType) -> &'static str {
    match error_type {
        YtDlpErrorType::BotDetection => "YouTube blocked the request. Update yt-dlp or try again later.",
        YtDlpErrorType::VideoUnavailable => "The video is unavailable. It may be private, removed or region locked.",
        YtDlpErrorType::NetworkError => "Network problem while downloading. Try again in a minute.",
        YtDlpErrorType::Unknown => "Failed to download the video. Check that the link is correct.",
    }
}

/// Builds the categorized error for a failed yt-dlp run.
pub fn classify_failure(url: &str, stderr: &str) -> DownloadError {
    let error_type = analyze_ytdlp_error(stderr);
    let message = format!("{} ({})", get_error_message(&error_type), url);

    let err = match error_type {
        YtDlpErrorType::VideoUnavailable => DownloadError::Unavailable(message),
        YtDlpErrorType::NetworkError => DownloadError::Network(message),
        YtDlpErrorType::BotDetection | YtDlpErrorType::Unknown => DownloadError::YtDlp(message),
    };
    log::error!("yt-dlp failed for {} [{}]: {}", url, err.subcategory(), stderr.trim());
    err
}

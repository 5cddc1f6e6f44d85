//! Fetching the album audio.
//!
//! [`Downloader`] is the seam the album pipeline depends on;
//! [`YtDlpDownloader`] extracts the audio track of a video as mp3 with yt-dlp.

pub mod error;
pub mod ytdlp_errors;

pub use error::DownloadError;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use url::Url;

use crate::core::config;
use crate::core::process::{command_line, run_with_timeout, ProcessError};
use crate::tracks::is_audio_file;

/// Validates a user supplied link: only http(s) URLs with a host are accepted.
pub fn parse_video_url(raw: &str) -> Result<Url, DownloadError> {
    let url = Url::parse(raw.trim()).map_err(|_| DownloadError::InvalidUrl(raw.to_string()))?;
    if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() {
        Ok(url)
    } else {
        Err(DownloadError::InvalidUrl(raw.to_string()))
    }
}

/// Source of album audio files.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Downloads the audio of `url` into `destination`, returning the file written.
    async fn download(&self, url: &Url, destination: &Path) -> Result<PathBuf, DownloadError>;

    /// Title of the video, used to guess artist/album/year.
    async fn video_title(&self, url: &Url) -> Result<String, DownloadError>;
}

/// yt-dlp backed [`Downloader`].
#[derive(Debug, Clone)]
pub struct YtDlpDownloader {
    bin: String,
    timeout: Duration,
    metadata_timeout: Duration,
}

impl Default for YtDlpDownloader {
    fn default() -> Self {
        Self {
            bin: config::YTDL_BIN.clone(),
            timeout: config::download::timeout(),
            metadata_timeout: config::download::metadata_timeout(),
        }
    }
}

impl YtDlpDownloader {
    pub fn new(bin: impl Into<String>, timeout: Duration, metadata_timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
            metadata_timeout,
        }
    }

    /// Arguments for an mp3 extraction into `destination`.
    pub fn download_arguments(url: &Url, destination: &Path) -> Vec<String> {
        vec![
            "--no-playlist".to_string(),
            "--extract-audio".to_string(),
            "--audio-quality".to_string(),
            "0".to_string(),
            "--audio-format".to_string(),
            "mp3".to_string(),
            "--print".to_string(),
            "after_move:filepath".to_string(),
            "-o".to_string(),
            destination.join("%(title)s.%(ext)s").to_string_lossy().into_owned(),
            url.to_string(),
        ]
    }

    /// Arguments for printing the video title without downloading.
    pub fn title_arguments(url: &Url) -> Vec<String> {
        vec![
            "--no-playlist".to_string(),
            "--skip-download".to_string(),
            "--print".to_string(),
            "title".to_string(),
            url.to_string(),
        ]
    }

    async fn run(&self, args: &[String], timeout: Duration, url: &Url) -> Result<String, DownloadError> {
        log::debug!("Running {}", command_line(&self.bin, args));
        let output = match run_with_timeout(Command::new(&self.bin).args(args), timeout).await {
            Ok(output) => output,
            Err(ProcessError::Io(e)) => {
                return Err(DownloadError::Process(format!("Failed to execute {}: {}", self.bin, e)))
            }
            Err(ProcessError::Timeout(t)) => {
                return Err(DownloadError::Timeout(format!(
                    "yt-dlp timed out after {}s for {}",
                    t.as_secs(),
                    url
                )))
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ytdlp_errors::classify_failure(url.as_str(), &stderr));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Most recently modified audio file in `dir`.
///
/// Fallback for when yt-dlp doesn't report the final path.
pub fn find_downloaded_file(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_audio_file(path))
        .filter_map(|path| {
            let modified = path.metadata().and_then(|m| m.modified()).ok()?;
            Some((modified, path))
        })
        .max_by_key(|(modified, _)| *modified)
        .map(|(_, path)| path)
}

#[async_trait]
impl Downloader for YtDlpDownloader {
    async fn download(&self, url: &Url, destination: &Path) -> Result<PathBuf, DownloadError> {
        log::info!("Downloading {} and converting to mp3 ...", url);
        let stdout = self
            .run(&Self::download_arguments(url, destination), self.timeout, url)
            .await?;

        let reported = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .map(PathBuf::from)
            .filter(|path| path.is_file());

        let path = match reported {
            Some(path) => path,
            None => {
                log::warn!("yt-dlp did not report the output file, scanning {}", destination.display());
                find_downloaded_file(destination).ok_or_else(|| {
                    DownloadError::FileNotFound(format!("No audio file found in {}", destination.display()))
                })?
            }
        };

        log::info!("✅ Downloaded {}", path.display());
        Ok(path)
    }

    async fn video_title(&self, url: &Url) -> Result<String, DownloadError> {
        let stdout = self
            .run(&Self::title_arguments(url), self.metadata_timeout, url)
            .await?;
        let title = stdout.lines().next().unwrap_or_default().trim().to_string();
        if title.is_empty() {
            return Err(DownloadError::YtDlp(format!("yt-dlp returned no title for {}", url)));
        }
        Ok(title)
    }
}

//! Mock downloader
//!
//! Writes a fake album file named after the configured title instead of
//! running yt-dlp.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use doralbum::download::{DownloadError, Downloader};
use url::Url;

pub struct MockDownloader {
    pub title: Option<String>,
    pub extension: String,
    pub fail_with: Option<fn(String) -> DownloadError>,
    downloads: AtomicU64,
}

impl MockDownloader {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            extension: "mp3".to_string(),
            fail_with: None,
            downloads: AtomicU64::new(0),
        }
    }

    /// Title lookups fail, downloads work
    pub fn without_title() -> Self {
        Self {
            title: None,
            ..Self::new("untitled")
        }
    }

    pub fn failing(error: fn(String) -> DownloadError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new("unused")
        }
    }

    pub fn downloads(&self) -> u64 {
        self.downloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Downloader for MockDownloader {
    async fn download(&self, url: &Url, destination: &Path) -> Result<PathBuf, DownloadError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.fail_with {
            return Err(error(format!("mock failure for {}", url)));
        }

        let name = self.title.as_deref().unwrap_or("album");
        let path = destination.join(format!("{}.{}", name, self.extension));
        tokio::fs::write(&path, b"fake album audio")
            .await
            .map_err(|e| DownloadError::Process(e.to_string()))?;
        Ok(path)
    }

    async fn video_title(&self, url: &Url) -> Result<String, DownloadError> {
        self.title
            .clone()
            .ok_or_else(|| DownloadError::Network(format!("no title for {}", url)))
    }
}

//! Album creation pipeline
//!
//! download → plan → split into a work directory → tag → copy into
//! `MUSIC_LIB_ROOT/<artist>/<album>`.
//!
//! Every external tool sits behind a trait object so the pipeline can run
//! against mocks.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::album_info::{extract_album_info, AlbumInfoGuess};
use crate::core::config;
use crate::core::error::AppResult;
use crate::download::{parse_video_url, Downloader, YtDlpDownloader};
use crate::metadata::{track_duration, AlbumTags, LoftyTagger, Tagger};
use crate::segmentation::{extension_of, segment_album, segmentation_plan, AudioSplitter, FfmpegSplitter, TimeKind};
use crate::timestamps::{format_timestamp, TimestampCache};

/// What to build.
#[derive(Debug, Clone)]
pub struct AlbumRequest {
    pub url: String,
    /// Raw track list, one `name time` per line
    pub tracks: String,
    pub time_kind: TimeKind,
    /// User supplied tags; missing ones are filled from the video title
    pub tags: AlbumTags,
}

/// What was built.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumReport {
    pub album_dir: PathBuf,
    /// Tracks copied into `album_dir`
    pub installed: Vec<PathBuf>,
    /// Tracks left out because a file with the same name already existed
    pub skipped: Vec<PathBuf>,
    pub guess: AlbumInfoGuess,
}

/// `" 42:17  <path>"`, or `"  -:--"` when the duration can't be read.
pub fn track_listing_line(path: &Path, duration: Option<Duration>) -> String {
    let shown = match duration {
        Some(duration) => format_timestamp(u32::try_from(duration.as_secs()).unwrap_or(u32::MAX)),
        None => "-:--".to_string(),
    };
    format!(" {:>8}  {}", shown, path.display())
}

impl AlbumReport {
    /// One line per installed track with its playing time.
    pub fn installed_listing(&self) -> Vec<String> {
        self.installed
            .iter()
            .map(|path| track_listing_line(path, track_duration(path)))
            .collect()
    }
}

/// Fills the tags the user left out from the title guess.
///
/// The album artist defaults to the artist.
pub fn resolve_tags(requested: &AlbumTags, guess: &AlbumInfoGuess) -> AlbumTags {
    let artist = requested.artist.clone().or_else(|| guess.artist.clone());
    AlbumTags {
        album_artist: requested.album_artist.clone().or_else(|| artist.clone()),
        artist,
        album: requested.album.clone().or_else(|| guess.album.clone()),
        year: requested.year.clone().or_else(|| guess.year.clone()),
        track_number: requested.track_number,
        track_name: requested.track_name,
    }
}

/// A name usable as a single path component.
fn path_component(name: &str) -> Option<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '-' } else { c })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => None,
        _ => Some(cleaned),
    }
}

/// `music_lib/<artist>/<album>`; the artist level is dropped when unknown and
/// `fallback_album` names the directory when the album is unknown.
pub fn album_directory(music_lib: &Path, tags: &AlbumTags, fallback_album: &str) -> PathBuf {
    let mut dir = music_lib.to_path_buf();
    if let Some(artist) = tags.artist.as_deref().and_then(path_component) {
        dir.push(artist);
    }
    let album = tags
        .album
        .as_deref()
        .and_then(path_component)
        .or_else(|| path_component(fallback_album))
        .unwrap_or_else(|| "Unknown Album".to_string());
    dir.push(album);
    dir
}

/// Copies `tracks` into `album_dir`, never overwriting existing files.
///
/// Returns `(installed, skipped)`.
pub async fn install_tracks(tracks: &[PathBuf], album_dir: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    tokio::fs::create_dir_all(album_dir).await?;

    let mut installed = Vec::new();
    let mut skipped = Vec::new();
    for track in tracks {
        let Some(file_name) = track.file_name() else {
            continue;
        };
        let destination = album_dir.join(file_name);
        if tokio::fs::try_exists(&destination).await? {
            log::warn!(
                "File '{}' already exists in '{}'. Skipping",
                file_name.to_string_lossy(),
                album_dir.display()
            );
            skipped.push(destination);
            continue;
        }
        tokio::fs::copy(track, &destination).await?;
        installed.push(destination);
    }
    Ok((installed, skipped))
}

/// Ties downloader, splitter and tagger together.
pub struct AlbumCreator {
    downloader: Arc<dyn Downloader>,
    splitter: Arc<dyn AudioSplitter>,
    tagger: Arc<dyn Tagger>,
    music_lib: PathBuf,
    work_root: PathBuf,
    cache: TimestampCache,
}

impl AlbumCreator {
    pub fn new(
        downloader: Arc<dyn Downloader>,
        splitter: Arc<dyn AudioSplitter>,
        tagger: Arc<dyn Tagger>,
        music_lib: impl Into<PathBuf>,
        work_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            downloader,
            splitter,
            tagger,
            music_lib: music_lib.into(),
            work_root: work_root.into(),
            cache: TimestampCache::new(),
        }
    }

    /// yt-dlp, ffmpeg and lofty with paths from the environment.
    pub fn from_config() -> Self {
        Self::new(
            Arc::new(YtDlpDownloader::default()),
            Arc::new(FfmpegSplitter::default()),
            Arc::new(LoftyTagger::new()),
            config::MUSIC_LIB_ROOT.as_str(),
            config::TEMP_FILES_DIR.clone(),
        )
    }

    pub fn cache(&self) -> &TimestampCache {
        &self.cache
    }

    pub async fn create(&self, request: &AlbumRequest) -> AppResult<AlbumReport> {
        let url = parse_video_url(&request.url)?;
        // Reject a bad track list before a long download.
        segmentation_plan(&request.tracks, request.time_kind, None, &self.cache)?;

        let guess = match self.downloader.video_title(&url).await {
            Ok(title) => {
                log::info!("Video title: {}", title);
                extract_album_info(&title)
            }
            Err(e) => {
                log::warn!("Could not fetch the video title [{}], no album info guess: {}", e.subcategory(), e);
                AlbumInfoGuess::default()
            }
        };

        let work_dir = self.work_root.join(format!("doralbum-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&work_dir).await?;

        let result = self.build(&url, request, guess, &work_dir).await;

        if let Err(e) = tokio::fs::remove_dir_all(&work_dir).await {
            log::warn!("Failed to clean up {}: {}", work_dir.display(), e);
        }
        result
    }

    async fn build(
        &self,
        url: &Url,
        request: &AlbumRequest,
        guess: AlbumInfoGuess,
        work_dir: &Path,
    ) -> AppResult<AlbumReport> {
        let album_file = self.downloader.download(url, work_dir).await?;
        log::info!("Album file: {}", album_file.display());

        let extension = extension_of(&album_file);
        let plan = segmentation_plan(&request.tracks, request.time_kind, extension.as_deref(), &self.cache)?;

        let tracks_dir = work_dir.join("tracks");
        tokio::fs::create_dir_all(&tracks_dir).await?;
        let tracks = segment_album(self.splitter.as_ref(), &album_file, &plan, &tracks_dir).await?;

        let tags = resolve_tags(&request.tags, &guess);
        let tagger = Arc::clone(&self.tagger);
        let (dir, album_tags) = (tracks_dir.clone(), tags.clone());
        tokio::task::spawn_blocking(move || tagger.tag_album(&dir, &album_tags))
            .await
            .map_err(anyhow::Error::from)??;

        let fallback = album_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let album_dir = album_directory(&self.music_lib, &tags, &fallback);
        let (installed, skipped) = install_tracks(&tracks, &album_dir).await?;
        log::info!("Album tracks reside in '{}'", album_dir.display());

        Ok(AlbumReport {
            album_dir,
            installed,
            skipped,
            guess,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_track_listing_line() {
        let path = Path::new("/music/Sleep/Dopesmoker/01 - Dopesmoker.mp3");
        assert_eq!(
            track_listing_line(path, Some(Duration::from_secs(3814))),
            "  1:03:34  /music/Sleep/Dopesmoker/01 - Dopesmoker.mp3"
        );
        assert_eq!(
            track_listing_line(path, Some(Duration::from_millis(185_900))),
            "     3:05  /music/Sleep/Dopesmoker/01 - Dopesmoker.mp3"
        );
        assert_eq!(track_listing_line(path, None), "     -:--  /music/Sleep/Dopesmoker/01 - Dopesmoker.mp3");
    }

    #[test]
    fn test_resolve_tags_prefers_user_values() {
        let requested = AlbumTags {
            album: Some("Dopesmoker".to_string()),
            ..Default::default()
        };
        let guess = AlbumInfoGuess {
            artist: Some("Sleep".to_string()),
            album: Some("Jerusalem".to_string()),
            year: Some("1999".to_string()),
        };
        let tags = resolve_tags(&requested, &guess);
        assert_eq!(tags.artist.as_deref(), Some("Sleep"));
        assert_eq!(tags.album_artist.as_deref(), Some("Sleep"));
        assert_eq!(tags.album.as_deref(), Some("Dopesmoker"));
        assert_eq!(tags.year.as_deref(), Some("1999"));
        assert!(tags.track_number && tags.track_name);
    }

    #[test]
    fn test_album_directory() {
        let lib = Path::new("/music");
        let tags = AlbumTags {
            artist: Some("AC/DC".to_string()),
            album: Some("Back in Black".to_string()),
            ..Default::default()
        };
        assert_eq!(album_directory(lib, &tags, "x"), PathBuf::from("/music/AC-DC/Back in Black"));
        assert_eq!(
            album_directory(lib, &AlbumTags::default(), "Some Upload"),
            PathBuf::from("/music/Some Upload")
        );
        assert_eq!(album_directory(lib, &AlbumTags::default(), ".."), PathBuf::from("/music/Unknown Album"));
    }

    #[tokio::test]
    async fn test_install_tracks_skips_existing() {
        let work = tempfile::tempdir().unwrap();
        let lib = tempfile::tempdir().unwrap();
        let album_dir = lib.path().join("Sleep").join("Dopesmoker");

        let tracks: Vec<PathBuf> = ["01 - a.mp3", "02 - b.mp3"].iter().map(|n| work.path().join(n)).collect();
        for track in &tracks {
            std::fs::write(track, b"new").unwrap();
        }
        std::fs::create_dir_all(&album_dir).unwrap();
        std::fs::write(album_dir.join("02 - b.mp3"), b"old").unwrap();

        let (installed, skipped) = install_tracks(&tracks, &album_dir).await.unwrap();
        assert_eq!(installed, vec![album_dir.join("01 - a.mp3")]);
        assert_eq!(skipped, vec![album_dir.join("02 - b.mp3")]);
        assert_eq!(std::fs::read(album_dir.join("02 - b.mp3")).unwrap(), b"old");
    }
}

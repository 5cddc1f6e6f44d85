//! Album tagging
//!
//! Album-wide values (artist, album artist, album, year) come from the user
//! or the title guess; per-track values (number, title) are inferred from the
//! file names written by the segmentation step.

mod lofty_tagger;

pub use lofty_tagger::{track_duration, LoftyTagger};

use std::path::{Path, PathBuf};

use lazy_regex::regex_captures;
use serde::Serialize;
use thiserror::Error;

use crate::tracks::{is_audio_file, parse_track_file_name, FileNameFormatError};

/// Tagging errors
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Failed to write tags to '{path}': {source}")]
    Lofty {
        path: String,
        #[source]
        source: lofty::error::LoftyError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input year tag '{0}' is invalid")]
    InvalidYear(String),

    #[error(transparent)]
    FileName(#[from] FileNameFormatError),
}

/// Album-wide tagging request.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumTags {
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    /// Infer the track number from each file name
    pub track_number: bool,
    /// Infer the track title from each file name
    pub track_name: bool,
}

impl Default for AlbumTags {
    fn default() -> Self {
        Self {
            artist: None,
            album_artist: None,
            album: None,
            year: None,
            track_number: true,
            track_name: true,
        }
    }
}

/// Tags written to one file. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackTags {
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub track_number: Option<u32>,
    pub track_name: Option<String>,
}

/// Strips leading zeros: `"02019"` → `"2019"`, `""` → `None`.
pub fn normalize_year(year: &str) -> Result<Option<String>, TagError> {
    let year = year.trim();
    if year.is_empty() {
        return Ok(None);
    }
    match regex_captures!(r"^0*(\d+)", year) {
        Some((_, digits)) => Ok(Some(digits.to_string())),
        None => Err(TagError::InvalidYear(year.to_string())),
    }
}

fn non_empty(field: &str, value: &Option<String>) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some("") => {
            log::warn!("Skipping empty '{}' tag", field);
            None
        }
        other => other.map(str::to_string),
    }
}

impl AlbumTags {
    /// Resolves the tags for one track file.
    pub fn for_file(&self, path: &Path) -> Result<TrackTags, TagError> {
        let mut tags = TrackTags {
            artist: non_empty("artist", &self.artist),
            album_artist: non_empty("album_artist", &self.album_artist),
            album: non_empty("album", &self.album),
            year: match &self.year {
                Some(year) => normalize_year(year)?,
                None => None,
            },
            ..Default::default()
        };

        if self.track_number || self.track_name {
            let parsed = parse_track_file_name(path)?;
            if self.track_number {
                tags.track_number = parsed.track_number.and_then(|n| n.parse().ok());
            }
            if self.track_name {
                tags.track_name = Some(parsed.track_name);
            }
        }
        Ok(tags)
    }
}

/// Audio files directly inside `directory`, sorted by name.
pub fn album_files(directory: &Path) -> Result<Vec<PathBuf>, TagError> {
    let mut files = std::fs::read_dir(directory)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_audio_file(path))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

/// Writes tags to audio files.
pub trait Tagger: Send + Sync {
    fn tag_file(&self, path: &Path, tags: &TrackTags) -> Result<(), TagError>;

    /// Tags every audio file in `directory`, returning the files tagged.
    fn tag_album(&self, directory: &Path, tags: &AlbumTags) -> Result<Vec<PathBuf>, TagError> {
        let files = album_files(directory)?;
        log::info!("Tagging {} files in {}", files.len(), directory.display());
        for file in &files {
            let track_tags = tags.for_file(file)?;
            log::debug!("{}: {:?}", file.display(), track_tags);
            self.tag_file(file, &track_tags)?;
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTagger {
        written: Mutex<Vec<(PathBuf, TrackTags)>>,
    }

    impl Tagger for RecordingTagger {
        fn tag_file(&self, path: &Path, tags: &TrackTags) -> Result<(), TagError> {
            self.written.lock().unwrap().push((path.to_path_buf(), tags.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_normalize_year() {
        assert_eq!(normalize_year("2019").unwrap(), Some("2019".to_string()));
        assert_eq!(normalize_year("02019").unwrap(), Some("2019".to_string()));
        assert_eq!(normalize_year("000").unwrap(), Some("0".to_string()));
        assert_eq!(normalize_year("").unwrap(), None);
        assert!(matches!(normalize_year("nineteen"), Err(TagError::InvalidYear(_))));
    }

    #[test]
    fn test_for_file_infers_number_and_name() {
        let tags = AlbumTags {
            artist: Some("Sleep".to_string()),
            album: Some("Dopesmoker".to_string()),
            year: Some("2003".to_string()),
            ..Default::default()
        };
        let track = tags.for_file(Path::new("/tmp/01 - Dopesmoker.mp3")).unwrap();
        assert_eq!(
            track,
            TrackTags {
                artist: Some("Sleep".to_string()),
                album_artist: None,
                album: Some("Dopesmoker".to_string()),
                year: Some("2003".to_string()),
                track_number: Some(1),
                track_name: Some("Dopesmoker".to_string()),
            }
        );
    }

    #[test]
    fn test_for_file_respects_toggles_and_skips_empty() {
        let tags = AlbumTags {
            artist: Some("  ".to_string()),
            track_number: false,
            ..Default::default()
        };
        let track = tags.for_file(Path::new("07 - Holy Mountain.mp3")).unwrap();
        assert_eq!(track.artist, None);
        assert_eq!(track.track_number, None);
        assert_eq!(track.track_name.as_deref(), Some("Holy Mountain"));
    }

    #[test]
    fn test_tag_album_visits_audio_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["02 - b.mp3", "01 - a.mp3", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let tagger = RecordingTagger::default();
        let tagged = tagger.tag_album(dir.path(), &AlbumTags::default()).unwrap();

        assert_eq!(tagged, vec![dir.path().join("01 - a.mp3"), dir.path().join("02 - b.mp3")]);
        let written = tagger.written.lock().unwrap();
        let names: Vec<Option<&str>> = written.iter().map(|(_, t)| t.track_name.as_deref()).collect();
        assert_eq!(names, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_for_file_accepts_three_digit_indexes() {
        let entries: Vec<_> = (0..100)
            .map(|i| crate::tracks::TrackEntry::new(format!("Track {}", i), crate::timestamps::format_timestamp(i * 60)))
            .collect();
        let plan = crate::segmentation::build_plan(&entries, Some("mp3")).unwrap();
        assert_eq!(plan[0].output_name, "001 - Track 0.mp3");

        let tags = AlbumTags::default();
        let first = tags.for_file(Path::new(&plan[0].output_name)).unwrap();
        assert_eq!(first.track_number, Some(1));
        assert_eq!(first.track_name.as_deref(), Some("Track 0"));
        let last = tags.for_file(Path::new(&plan[99].output_name)).unwrap();
        assert_eq!(last.track_number, Some(100));
        assert_eq!(last.track_name.as_deref(), Some("Track 99"));
    }

    #[test]
    fn test_tag_album_bad_year_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01 - a.mp3"), b"").unwrap();
        let tags = AlbumTags {
            year: Some("soon".to_string()),
            ..Default::default()
        };
        let err = RecordingTagger::default().tag_album(dir.path(), &tags).unwrap_err();
        assert_eq!(err.to_string(), "Input year tag 'soon' is invalid");
    }
}

//! Track file name parser
//!
//! Recovers the track number and title from file names produced by the
//! segmentation step, e.g. `"01 - Loyal to the Pack.mp3"`.

use std::path::Path;

use serde::Serialize;

use super::grammar::{file_number_end, is_track_name};
use super::FileNameFormatError;

/// Audio extensions recognised at the end of a track file name.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "mp4", "m4a", "opus", "ogg", "flac", "wav"];

/// Track number and title recovered from a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackFileName {
    pub track_number: Option<String>,
    pub track_name: String,
}

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| AUDIO_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Parses the base name of `path` as `[number sep] name.ext`.
pub fn parse_track_file_name(path: impl AsRef<Path>) -> Result<TrackFileName, FileNameFormatError> {
    let path = path.as_ref();
    let error = || FileNameFormatError {
        file_name: path.display().to_string(),
    };

    if !is_audio_file(path) {
        return Err(error());
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(error)?;
    let chars: Vec<char> = stem.chars().collect();

    if let Some((digits, name_start)) = file_number_end(&chars) {
        if is_track_name(&chars[name_start..]) {
            return Ok(TrackFileName {
                track_number: Some(chars[..digits].iter().collect()),
                track_name: chars[name_start..].iter().collect(),
            });
        }
    }

    if is_track_name(&chars) {
        return Ok(TrackFileName {
            track_number: None,
            track_name: stem.to_string(),
        });
    }

    Err(error())
}

//! Track list parsing
//!
//! Loosely structured, human-typed track listings (`"2. Track Name - 3:45"`)
//! are turned into ordered [`TrackEntry`] values. Time tokens are checked for
//! shape only; they become [`crate::timestamps::Timestamp`]s during
//! segmentation.

mod block;
mod file_name;
mod grammar;
mod line;

pub use block::parse_block;
pub use file_name::{is_audio_file, parse_track_file_name, TrackFileName, AUDIO_EXTENSIONS};
pub use line::parse_line;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One parsed track line: a name and its time token (start timestamp or duration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub name: String,
    pub time: String,
}

impl TrackEntry {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
        }
    }
}

/// A line that cannot be split into a track name and a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't parse '{line}'. Please use a format as 'trackname - 3:45'")]
pub struct LineFormatError {
    pub line: String,
}

/// First unparsable line of a track list block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't parse line {line_number}: '{line}'. Please use a format as 'trackname - 3:45'")]
pub struct TrackListParseError {
    /// 1-based, blank lines included
    pub line_number: usize,
    pub line: String,
    #[source]
    pub source: LineFormatError,
}

/// A file name that does not look like `[number sep] name.ext`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't parse track number and name from file '{file_name}'")]
pub struct FileNameFormatError {
    pub file_name: String,
}

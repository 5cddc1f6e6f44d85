//! Album segmentation
//!
//! Turns parsed track entries into [`SegmentationInstruction`]s (output file
//! name, start, optional end) and hands them to an [`AudioSplitter`].
//!
//! - `durations`: per-track durations → starting timestamps
//! - `plan`: starting timestamps → validated, ordered instructions
//! - `splitter`: running instructions through ffmpeg

mod durations;
mod plan;
mod splitter;

pub use durations::{durations_to_timestamps, durations_to_timestamps_cached};
pub use plan::{build_plan, build_plan_cached, extension_of, output_name};
pub use splitter::{segment_album, AudioSplitter, FfmpegSplitter, SplitError};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timestamps::{TimestampCache, TimestampError};
use crate::tracks::{parse_block, TrackListParseError};

/// One track's boundaries inside the album file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationInstruction {
    /// `"01 - Track Name.mp3"`
    pub output_name: String,
    pub start_seconds: u32,
    /// `None` for the last track: until the end of the source
    pub end_seconds: Option<u32>,
}

impl SegmentationInstruction {
    pub fn new(output_name: impl Into<String>, start_seconds: u32, end_seconds: Option<u32>) -> Self {
        Self {
            output_name: output_name.into(),
            start_seconds,
            end_seconds,
        }
    }
}

/// How the time column of a track list is meant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeKind {
    /// Each time is where the track starts in the album
    #[default]
    Timestamps,
    /// Each time is how long the track lasts
    Durations,
}

impl FromStr for TimeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("timestamp") {
            Ok(TimeKind::Timestamps)
        } else if lower.starts_with("duration") {
            Ok(TimeKind::Durations)
        } else {
            Err(format!("Unknown time kind '{}': expected 'timestamps' or 'durations'", s))
        }
    }
}

/// Plan building errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentationError {
    #[error("No tracks to segment")]
    Empty,

    #[error("Track {position} ('{name}'): {source}")]
    Timestamp {
        position: usize,
        name: String,
        #[source]
        source: TimestampError,
    },

    #[error(
        "Track '{position} - {name}' starting timestamp '{time}' should be 'bigger' than track's '{previous_position} - {previous_name}'; '{previous_time}'"
    )]
    NonMonotonic {
        previous_position: usize,
        previous_name: String,
        previous_time: String,
        position: usize,
        name: String,
        time: String,
    },
}

/// Malformed duration while converting durations to timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Track {position} ('{name}') duration: {source}")]
pub struct DurationConversionError {
    pub position: usize,
    pub name: String,
    #[source]
    pub source: TimestampError,
}

/// Anything that can go wrong between raw track text and a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error(transparent)]
    Parse(#[from] TrackListParseError),

    #[error(transparent)]
    Durations(#[from] DurationConversionError),

    #[error(transparent)]
    Segmentation(#[from] SegmentationError),
}

/// Raw track list text → segmentation plan.
///
/// `extension` is appended to every output name (see [`extension_of`]).
pub fn segmentation_plan(
    text: &str,
    kind: TimeKind,
    extension: Option<&str>,
    cache: &TimestampCache,
) -> Result<Vec<SegmentationInstruction>, PlanError> {
    let entries = parse_block(text)?;
    let entries = match kind {
        TimeKind::Timestamps => entries,
        TimeKind::Durations => durations_to_timestamps_cached(&entries, cache)?,
    };
    Ok(build_plan_cached(&entries, extension, cache)?)
}

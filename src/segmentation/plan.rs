use std::path::Path;

use super::{SegmentationError, SegmentationInstruction};
use crate::timestamps::{Timestamp, TimestampCache};
use crate::tracks::TrackEntry;

/// Extension of the album file, used for naming the track files.
///
/// Returns `None` when the file name has no extension.
pub fn extension_of(album_file: impl AsRef<Path>) -> Option<String> {
    album_file
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}

/// Width of the zero-padded track index: 2 digits, more for 100+ tracks.
fn index_width(total: usize) -> usize {
    total.to_string().len().max(2)
}

/// `"{index} - {name}{.extension}"` with a 1-based, zero-padded index.
pub fn output_name(index: usize, total: usize, name: &str, extension: Option<&str>) -> String {
    let width = index_width(total);
    match extension {
        Some(ext) => format!("{:0width$} - {}.{}", index + 1, name, ext, width = width),
        None => format!("{:0width$} - {}", index + 1, name, width = width),
    }
}

/// Builds the segmentation plan from `(name, starting timestamp)` entries.
///
/// Timestamps must be strictly increasing. The last instruction has no end
/// (it runs to the end of the album file).
pub fn build_plan(
    entries: &[TrackEntry],
    extension: Option<&str>,
) -> Result<Vec<SegmentationInstruction>, SegmentationError> {
    build_plan_cached(entries, extension, &TimestampCache::disabled())
}

/// Same as [`build_plan`], parsing through `cache`.
pub fn build_plan_cached(
    entries: &[TrackEntry],
    extension: Option<&str>,
    cache: &TimestampCache,
) -> Result<Vec<SegmentationInstruction>, SegmentationError> {
    if entries.is_empty() {
        return Err(SegmentationError::Empty);
    }

    let starts = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            cache.parse(&entry.time).map_err(|source| SegmentationError::Timestamp {
                position: index + 1,
                name: entry.name.clone(),
                source,
            })
        })
        .collect::<Result<Vec<Timestamp>, _>>()?;

    for (index, pair) in starts.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            let (previous, current) = (&entries[index], &entries[index + 1]);
            return Err(SegmentationError::NonMonotonic {
                previous_position: index + 1,
                previous_name: previous.name.clone(),
                previous_time: previous.time.clone(),
                position: index + 2,
                name: current.name.clone(),
                time: current.time.clone(),
            });
        }
    }

    let total = entries.len();
    let plan = entries
        .iter()
        .zip(&starts)
        .enumerate()
        .map(|(index, (entry, start))| SegmentationInstruction {
            output_name: output_name(index, total, &entry.name, extension),
            start_seconds: start.to_seconds(),
            end_seconds: starts.get(index + 1).map(|next| next.to_seconds()),
        })
        .collect();

    Ok(plan)
}

use super::DurationConversionError;
use crate::timestamps::{Timestamp, TimestampCache};
use crate::tracks::TrackEntry;

/// Converts per-track durations into starting timestamps.
///
/// The first track starts at `0:00`; every following track starts at the sum
/// of all preceding durations. Every duration is validated, including the
/// last one whose value does not affect any start.
///
/// ```
/// use doralbum::segmentation::durations_to_timestamps;
/// use doralbum::tracks::TrackEntry;
///
/// let durations = vec![TrackEntry::new("Know your enemy", "3:45"), TrackEntry::new("Wake up", "4:53")];
/// let starts = durations_to_timestamps(&durations).unwrap();
/// assert_eq!(starts[1], TrackEntry::new("Wake up", "3:45"));
/// ```
pub fn durations_to_timestamps(entries: &[TrackEntry]) -> Result<Vec<TrackEntry>, DurationConversionError> {
    durations_to_timestamps_cached(entries, &TimestampCache::disabled())
}

/// Same as [`durations_to_timestamps`], parsing through `cache`.
pub fn durations_to_timestamps_cached(
    entries: &[TrackEntry],
    cache: &TimestampCache,
) -> Result<Vec<TrackEntry>, DurationConversionError> {
    let mut start = Timestamp::ZERO;
    let mut converted = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let duration = cache.parse(&entry.time).map_err(|source| DurationConversionError {
            position: index + 1,
            name: entry.name.clone(),
            source,
        })?;
        converted.push(TrackEntry::new(entry.name.clone(), start.render()));
        start += duration;
    }

    Ok(converted)
}

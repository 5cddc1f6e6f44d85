use super::{parse_line, TrackEntry, TrackListParseError};

/// Parses a multi-line track list (e.g. copy-pasted from a video description).
///
/// Lines are trimmed and blank lines skipped. The first line that does not
/// parse fails the whole call; nothing is dropped silently.
pub fn parse_block(text: &str) -> Result<Vec<TrackEntry>, TrackListParseError> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry = parse_line(line).map_err(|source| TrackListParseError {
            line_number: index + 1,
            line: line.to_string(),
            source,
        })?;
        entries.push(entry);
    }

    log::debug!("Parsed {} track entries", entries.len());
    Ok(entries)
}

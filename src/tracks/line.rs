//! Single track line parser
//!
//! Turns a human-written line such as `"2.  Man vs. God - 0:07"` into a
//! [`TrackEntry`]. See [`super::grammar`] for the accepted shape.

use super::grammar::{is_time_field, is_track_name, sep2_end, track_number_end};
use super::{LineFormatError, TrackEntry};

/// Parses one track line into its name and (unvalidated) time token.
///
/// The line is trimmed first. A leading track number is dropped when it is
/// followed by a separator. When the name/time boundary is ambiguous the
/// longest valid name wins.
///
/// # Examples
///
/// ```
/// use doralbum::tracks::parse_line;
///
/// let entry = parse_line("01. Know Your Enemy - 4:55").unwrap();
/// assert_eq!(entry.name, "Know Your Enemy");
/// assert_eq!(entry.time, "4:55");
/// ```
pub fn parse_line(line: &str) -> Result<TrackEntry, LineFormatError> {
    let trimmed = line.trim();
    let chars: Vec<char> = trimmed.chars().collect();

    let mut body_starts = Vec::with_capacity(2);
    if let Some((_, name_start)) = track_number_end(&chars) {
        body_starts.push(name_start);
    }
    body_starts.push(0);

    body_starts
        .into_iter()
        .find_map(|start| split_name_and_time(&chars, start))
        .ok_or_else(|| LineFormatError {
            line: trimmed.to_string(),
        })
}

/// Tries every name end from the right so the longest name is found first.
fn split_name_and_time(chars: &[char], name_start: usize) -> Option<TrackEntry> {
    (name_start + 1..chars.len()).rev().find_map(|name_end| {
        let time_start = sep2_end(chars, name_end)?;
        if !is_time_field(&chars[time_start..]) || !is_track_name(&chars[name_start..name_end]) {
            return None;
        }
        Some(TrackEntry {
            name: chars[name_start..name_end].iter().collect(),
            time: chars[time_start..].iter().collect(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(line: &str) -> (String, String) {
        let entry = parse_line(line).unwrap_or_else(|e| panic!("{line:?}: {e}"));
        (entry.name, entry.time)
    }

    fn pair(name: &str, time: &str) -> (String, String) {
        (name.to_string(), time.to_string())
    }

    #[test]
    fn test_reference_lines() {
        assert_eq!(parsed("01. track_name - 00:00"), pair("track_name", "00:00"));
        assert_eq!(parsed("01,   1312 - 00:00:00"), pair("1312", "00:00:00"));
        assert_eq!(parsed("2  -  Faith in Physics - 12:43"), pair("Faith in Physics", "12:43"));
        assert_eq!(parsed("23   -   Ντίσκο Τσουτσούνι - 1:00:00"), pair("Ντίσκο Τσουτσούνι", "1:00:00"));
        assert_eq!(parsed("2.  Man vs. God - 0:07"), pair("Man vs. God", "0:07"));
    }

    #[test]
    fn test_track_number_variants_are_equivalent() {
        for line in ["01. Track - 0:00", "1 Track - 0:00", "01 Track - 0:00", "1) Track - 0:00", "Track - 0:00"] {
            assert_eq!(parsed(line), pair("Track", "0:00"), "line {line:?}");
        }
    }

    #[test]
    fn test_separator_between_name_and_time() {
        assert_eq!(parsed("Doteru 3:45"), pair("Doteru", "3:45"));
        assert_eq!(parsed("Doteru\t3:45"), pair("Doteru", "3:45"));
        assert_eq!(parsed("Doteru ... 3:45"), pair("Doteru", "3:45"));
        assert_eq!(parsed("Doteru--3:45"), pair("Doteru", "3:45"));
    }

    #[test]
    fn test_numbers_inside_titles_are_kept() {
        assert_eq!(parsed("1312 - 0:00"), pair("1312", "0:00"));
        assert_eq!(parsed("Track 10 3:45"), pair("Track 10", "3:45"));
        assert_eq!(parsed("3. 99 Problems - 4:20"), pair("99 Problems", "4:20"));
        assert_eq!(parsed("12Bar Blues - 2:00"), pair("12Bar Blues", "2:00"));
    }

    #[test]
    fn test_punctuation_inside_names() {
        assert_eq!(parsed("05 - Don't Stop (Live) - 6:01"), pair("Don't Stop (Live)", "6:01"));
        assert_eq!(parsed("Part I: The Beginning - 1:02:03"), pair("Part I: The Beginning", "1:02:03"));
        assert_eq!(parsed("Rock’n’Roll Star 12:00"), pair("Rock’n’Roll Star", "12:00"));
        assert_eq!(parsed("Self-Esteem, Pt. 2 - 9:59"), pair("Self-Esteem, Pt. 2", "9:59"));
        assert_eq!(parsed("Hey! - 1:00"), pair("Hey!", "1:00"));
    }

    #[test]
    fn test_longest_name_wins() {
        assert_eq!(parsed("Song. - 1:00"), pair("Song.", "1:00"));
        assert_eq!(parsed("Song.1:00"), pair("Song", "1:00"));
        assert_eq!(parsed("Intro 1 2:00"), pair("Intro 1", "2:00"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parsed("   07.  Outro   -   45:00  "), pair("Outro", "45:00"));
    }

    #[test]
    fn test_unparsable_lines() {
        for line in ["", "Just a title", "3:45", "- 3:45", "Track - ", "Track - 3:4a", "Track - 1:2:3:4", "Track & Co - 1:00"] {
            let err = parse_line(line).unwrap_err();
            assert_eq!(err.line, line.trim(), "line {line:?}");
        }
    }
}

//! Character classes and small recognizers shared by the line and file-name parsers.
//!
//! ```text
//! line       := [number sep1] name sep2 time
//! number     := digit{1,2}
//! sep1       := [ \t.\-,)]+
//! name       := word (word_sep word)*
//! word       := "("? word_start word_char* ")"?
//! word_sep   := [ \t,]+
//! sep2       := [ \t]* [\-.]+ [ \t]*  |  [ \t]+
//! time       := (digit{1,2} ":"){0,2} digit{1,2}
//! ```
//!
//! Recognizers work on a `&[char]`: `is_*` check that a whole slice matches,
//! `*_end` return the index just past what they consumed.

/// First character of a word: any letter or digit (any script), `_` or an apostrophe.
pub(crate) fn is_word_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Characters allowed after the first one inside a word.
pub(crate) fn is_word_char(c: char) -> bool {
    is_word_start(c) || matches!(c, '.' | '-' | '\u{2019}' | ':' | '!')
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_word_sep(c: char) -> bool {
    is_blank(c) || c == ','
}

fn skip_while(chars: &[char], mut pos: usize, pred: impl Fn(char) -> bool) -> usize {
    while pos < chars.len() && pred(chars[pos]) {
        pos += 1;
    }
    pos
}

/// Whether `chars` is exactly one word.
fn is_word(chars: &[char]) -> bool {
    let body = chars.strip_prefix(&['(']).unwrap_or(chars);
    let body = body.strip_suffix(&[')']).unwrap_or(body);
    match body.split_first() {
        Some((first, rest)) => is_word_start(*first) && rest.iter().all(|c| is_word_char(*c)),
        None => false,
    }
}

/// Whether `chars` is exactly a track name: words joined by `[ \t,]+`.
pub(crate) fn is_track_name(chars: &[char]) -> bool {
    if chars.is_empty() || is_word_sep(chars[0]) || is_word_sep(chars[chars.len() - 1]) {
        return false;
    }
    chars
        .split(|c| is_word_sep(*c))
        .filter(|piece| !piece.is_empty())
        .all(is_word)
}

/// Leading track number followed by its separator. Returns where the name may begin.
///
/// Two digits are tried before one, and the separator is required so digits
/// that belong to the title (`"1312 - 0:00"`) are left alone.
pub(crate) fn track_number_end(chars: &[char]) -> Option<(usize, usize)> {
    for digits in [2, 1] {
        if chars.len() <= digits || !chars[..digits].iter().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let end = sep1_end(chars, digits);
        if end > digits {
            return Some((digits, end));
        }
    }
    None
}

/// Leading index of a track file name (`"001 - Name"`): any run of ASCII
/// digits followed by `sep1`.
pub(crate) fn file_number_end(chars: &[char]) -> Option<(usize, usize)> {
    let digits = skip_while(chars, 0, |c| c.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    let end = sep1_end(chars, digits);
    (end > digits).then_some((digits, end))
}

/// `sep1`: any mix of blanks and `.-,)`.
fn sep1_end(chars: &[char], start: usize) -> usize {
    skip_while(chars, start, |c| is_blank(c) || matches!(c, '.' | '-' | ',' | ')'))
}

/// `sep2`: blanks, then either a run of `-`/`.` followed by blanks, or nothing more.
pub(crate) fn sep2_end(chars: &[char], start: usize) -> Option<usize> {
    let pos = skip_while(chars, start, is_blank);
    let pos = skip_while(chars, pos, |c| c == '-' || c == '.');
    let pos = skip_while(chars, pos, is_blank);
    (pos > start).then_some(pos)
}

/// Whether `chars` is exactly a time field: 1 to 3 groups of 1-2 ASCII digits joined by `:`.
pub(crate) fn is_time_field(chars: &[char]) -> bool {
    let groups: Vec<&[char]> = chars.split(|c| *c == ':').collect();
    (1..=3).contains(&groups.len())
        && groups
            .iter()
            .all(|g| (1..=2).contains(&g.len()) && g.iter().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_file_number_takes_every_digit() {
        assert_eq!(file_number_end(&chars("001 - Track")), Some((3, 6)));
        assert_eq!(file_number_end(&chars("07 Outro")), Some((2, 3)));
        assert_eq!(file_number_end(&chars("1312")), None);
        assert_eq!(file_number_end(&chars("Track")), None);
        // Track list lines keep the two digit limit.
        assert_eq!(track_number_end(&chars("001 - Track")), None);
    }

    #[test]
    fn test_words() {
        assert!(is_word(&chars("Track")));
        assert!(is_word(&chars("vs.")));
        assert!(is_word(&chars("(Live)")));
        assert!(is_word(&chars("Don't")));
        assert!(is_word(&chars("rock’n’roll")));
        assert!(is_word(&chars("Ντίσκο")));
        assert!(is_word(&chars("track_name")));
        assert!(!is_word(&chars("-dash")));
        assert!(!is_word(&chars("()")));
        assert!(!is_word(&chars("a)b")));
    }

    #[test]
    fn test_track_names() {
        assert!(is_track_name(&chars("Man vs. God")));
        assert!(is_track_name(&chars("Faith in Physics")));
        assert!(is_track_name(&chars("One, Two")));
        assert!(!is_track_name(&chars("Track ")));
        assert!(!is_track_name(&chars("A - B")));
        assert!(!is_track_name(&chars("")));
    }

    #[test]
    fn test_track_number_requires_separator() {
        assert_eq!(track_number_end(&chars("01. Track")), Some((2, 4)));
        assert_eq!(track_number_end(&chars("1 Track")), Some((1, 2)));
        assert_eq!(track_number_end(&chars("2  -  Faith")), Some((1, 6)));
        assert_eq!(track_number_end(&chars("7) Intro")), Some((1, 3)));
        assert_eq!(track_number_end(&chars("1312")), None);
        assert_eq!(track_number_end(&chars("12Track")), None);
    }

    #[test]
    fn test_separators_and_time() {
        assert_eq!(sep2_end(&chars("x - 1"), 1), Some(4));
        assert_eq!(sep2_end(&chars("x 1"), 1), Some(2));
        assert_eq!(sep2_end(&chars("x.1"), 1), Some(2));
        assert_eq!(sep2_end(&chars("x1"), 1), None);

        assert!(is_time_field(&chars("0:07")));
        assert!(is_time_field(&chars("1:00:00")));
        assert!(is_time_field(&chars("5")));
        assert!(!is_time_field(&chars("1:2:3:4")));
        assert!(!is_time_field(&chars("123")));
        assert!(!is_time_field(&chars("1:")));
    }
}

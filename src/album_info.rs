//! Best-effort album information from a free-text title.
//!
//! Video titles of full-album uploads usually follow one of a few shapes:
//!
//! - `Artist - Album (Year)`
//! - `Album (Year)`
//! - `Artist - Album`
//! - `Album`
//!
//! The templates are tried in that order and the first one found anywhere in
//! the title wins, so the guess carries as many fields as the title allows.

use lazy_regex::{regex, Lazy, Regex};
use serde::{Deserialize, Serialize};

/// Sparse guess: `None` means "not inferred".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumInfoGuess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl AlbumInfoGuess {
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.album.is_none() && self.year.is_none()
    }
}

#[derive(Clone, Copy)]
enum Field {
    Artist,
    Album,
    Year,
}

/// Template regex plus the field each capture group fills.
type Template = (&'static Lazy<Regex>, &'static [Field]);

fn templates() -> [Template; 4] {
    [
        (
            regex!(r"([\w ]*\w)[\t ]*[\-\.][\t ]*([\w ]*\w)[\t \-\.]+\(?(\d{4})\)?"),
            &[Field::Artist, Field::Album, Field::Year],
        ),
        (regex!(r"([\w ]*\w)[\t \-\.]+\(?(\d{4})\)?"), &[Field::Album, Field::Year]),
        (regex!(r"([\w ]*\w)[\t ]*[\-\.][\t ]*([\w ]*\w)"), &[Field::Artist, Field::Album]),
        (regex!(r"([\w ]*\w)"), &[Field::Album]),
    ]
}

/// Guesses `{artist, album, year}` from `title`.
///
/// ```
/// use doralbum::album_info::extract_album_info;
///
/// let guess = extract_album_info("Alber Jupiter - We Are Just Floating In Space (2019) (New Full Album)");
/// assert_eq!(guess.artist.as_deref(), Some("Alber Jupiter"));
/// assert_eq!(guess.album.as_deref(), Some("We Are Just Floating In Space"));
/// assert_eq!(guess.year.as_deref(), Some("2019"));
/// ```
pub fn extract_album_info(title: &str) -> AlbumInfoGuess {
    for (re, fields) in templates() {
        let Some(caps) = re.captures(title) else {
            continue;
        };

        let mut guess = AlbumInfoGuess::default();
        for (index, field) in fields.iter().enumerate() {
            let value = caps
                .get(index + 1)
                .map(|m| m.as_str().trim().to_string())
                .filter(|v| !v.is_empty());
            match field {
                Field::Artist => guess.artist = value,
                Field::Album => guess.album = value,
                Field::Year => guess.year = value,
            }
        }
        log::debug!("Album info guess for '{}': {:?}", title, guess);
        return guess;
    }

    log::debug!("No album info found in '{}'", title);
    AlbumInfoGuess::default()
}

use std::path::Path;
use std::time::Duration;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::Tag;

use super::{TagError, Tagger, TrackTags};

/// [`Tagger`] writing the file's native tag format through `lofty`
/// (ID3v2 for mp3).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagger;

impl LoftyTagger {
    pub fn new() -> Self {
        Self
    }
}

fn lofty_error(path: &Path) -> impl FnOnce(lofty::error::LoftyError) -> TagError + '_ {
    move |source| TagError::Lofty {
        path: path.display().to_string(),
        source,
    }
}

/// Playing time read from the audio properties, `None` when unreadable.
pub fn track_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            log::debug!("No duration for {}: {}", path.display(), e);
            None
        }
    }
}

impl Tagger for LoftyTagger {
    fn tag_file(&self, path: &Path, tags: &TrackTags) -> Result<(), TagError> {
        let mut tagged = lofty::read_from_path(path).map_err(lofty_error(path))?;

        let tag_type = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .map(|tag| tag.tag_type())
            .unwrap_or_else(|| tagged.primary_tag_type());
        if tagged.tag(tag_type).is_none() {
            tagged.insert_tag(Tag::new(tag_type));
        }
        let Some(tag) = tagged.tag_mut(tag_type) else {
            return Ok(());
        };

        if let Some(artist) = &tags.artist {
            tag.set_artist(artist.clone());
        }
        if let Some(album_artist) = &tags.album_artist {
            tag.insert_text(ItemKey::AlbumArtist, album_artist.clone());
        }
        if let Some(album) = &tags.album {
            tag.set_album(album.clone());
        }
        if let Some(year) = &tags.year {
            tag.insert_text(ItemKey::RecordingDate, year.clone());
        }
        if let Some(number) = tags.track_number {
            tag.set_track(number);
        }
        if let Some(name) = &tags.track_name {
            tag.set_title(name.clone());
        }

        tagged
            .save_to_path(path, WriteOptions::default())
            .map_err(lofty_error(path))?;
        log::info!("Tagged {}", path.display());
        Ok(())
    }
}

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use doralbum::metadata::{TagError, Tagger, TrackTags};

/// Keeps the tags instead of writing them.
#[derive(Default)]
pub struct MockTagger {
    pub written: Mutex<Vec<(PathBuf, TrackTags)>>,
}

impl MockTagger {
    pub fn written(&self) -> Vec<(PathBuf, TrackTags)> {
        self.written.lock().unwrap().clone()
    }
}

impl Tagger for MockTagger {
    fn tag_file(&self, path: &Path, tags: &TrackTags) -> Result<(), TagError> {
        self.written.lock().unwrap().push((path.to_path_buf(), tags.clone()));
        Ok(())
    }
}

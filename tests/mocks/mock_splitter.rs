use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use doralbum::segmentation::{AudioSplitter, SplitError};

/// Records each cut and writes an empty track file.
#[derive(Default)]
pub struct MockSplitter {
    pub cuts: Mutex<Vec<(String, u32, Option<u32>)>>,
}

impl MockSplitter {
    pub fn cuts(&self) -> Vec<(String, u32, Option<u32>)> {
        self.cuts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioSplitter for MockSplitter {
    async fn split(
        &self,
        _source: &Path,
        start_seconds: u32,
        end_seconds: Option<u32>,
        output: &Path,
    ) -> Result<(), SplitError> {
        tokio::fs::write(output, b"").await?;
        let name = output.file_name().unwrap().to_string_lossy().into_owned();
        self.cuts.lock().unwrap().push((name, start_seconds, end_seconds));
        Ok(())
    }
}

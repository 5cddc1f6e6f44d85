//! Mock collaborators for pipeline tests
//!
//! Stand-ins for yt-dlp, ffmpeg and the tag writer that only touch a
//! temporary directory.

#![allow(dead_code)]

pub mod mock_downloader;
pub mod mock_splitter;
pub mod mock_tagger;

pub use mock_downloader::MockDownloader;
pub use mock_splitter::MockSplitter;
pub use mock_tagger::MockTagger;

//! Doralbum - build a local music library from full-album videos
//!
//! # Module Structure
//!
//! - `timestamps`: `Timestamp` value type and an optional parse cache
//! - `tracks`: track list and track file name parsing
//! - `segmentation`: track lists → segmentation plans → ffmpeg
//! - `album_info`: artist/album/year guess from a video title
//! - `download`: yt-dlp audio download
//! - `metadata`: tag writing
//! - `album`: the end-to-end pipeline
//! - `core`: configuration, errors, logging, process helpers

pub mod album;
pub mod album_info;
pub mod cli;
pub mod core;
pub mod download;
pub mod metadata;
pub mod segmentation;
pub mod timestamps;
pub mod tracks;

// Re-export commonly used types for convenience
pub use album::{AlbumCreator, AlbumReport, AlbumRequest};
pub use crate::core::{config, AppError, AppResult};
pub use segmentation::{segmentation_plan, SegmentationInstruction, TimeKind};
pub use timestamps::{Timestamp, TimestampCache};
pub use tracks::{parse_block, parse_line, TrackEntry};

//! Album timestamps
//!
//! - [`Timestamp`]: canonical elapsed-time value parsed from `hh:mm:ss`-like text
//! - [`TimestampCache`]: optional memoization layer for repeated parses

mod cache;
mod timestamp;

pub use cache::{CacheStats, TimestampCache};
pub use timestamp::{Timestamp, TimestampError};

/// Format seconds as M:SS or H:MM:SS
pub fn format_timestamp(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

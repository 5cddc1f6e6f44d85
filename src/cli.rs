use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::metadata::AlbumTags;
use crate::segmentation::TimeKind;

#[derive(Parser)]
#[command(name = "doralbum")]
#[command(author, version, about = "Turn a full-album video into a tagged album in your music library", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the track list comes from and how to read its times.
#[derive(Args, Debug, Clone)]
pub struct TrackListArgs {
    /// File with one "track name - time" per line (default: stdin until an empty line)
    #[arg(short, long)]
    pub tracks: Option<PathBuf>,

    /// Times are track durations instead of starting timestamps
    #[arg(long)]
    pub durations: bool,
}

impl TrackListArgs {
    pub fn time_kind(&self) -> TimeKind {
        if self.durations {
            TimeKind::Durations
        } else {
            TimeKind::Timestamps
        }
    }
}

/// Tag values; anything left out is guessed from the video title where possible.
#[derive(Args, Debug, Clone, Default)]
pub struct TagArgs {
    /// Lead performer (TPE1)
    #[arg(short, long)]
    pub artist: Option<String>,

    /// Band/orchestra (TPE2), defaults to the artist
    #[arg(long)]
    pub album_artist: Option<String>,

    #[arg(long)]
    pub album: Option<String>,

    #[arg(short, long)]
    pub year: Option<String>,

    /// Don't write track numbers inferred from the file names
    #[arg(long)]
    pub no_track_number: bool,

    /// Don't write track titles inferred from the file names
    #[arg(long)]
    pub no_track_name: bool,
}

impl TagArgs {
    pub fn album_tags(&self) -> AlbumTags {
        AlbumTags {
            artist: self.artist.clone(),
            album_artist: self.album_artist.clone(),
            album: self.album.clone(),
            year: self.year.clone(),
            track_number: !self.no_track_number,
            track_name: !self.no_track_name,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download an album video, split it into tracks, tag them and add them to the library
    Create {
        /// Video URL
        url: String,

        #[command(flatten)]
        tracks: TrackListArgs,

        #[command(flatten)]
        tags: TagArgs,
    },

    /// Print the segmentation plan for a track list as JSON
    Plan {
        #[command(flatten)]
        tracks: TrackListArgs,

        /// Album file the plan is for (its extension names the tracks)
        #[arg(long)]
        album_file: Option<PathBuf>,
    },

    /// Print the artist/album/year guess for a title (or a video URL) as JSON
    Title {
        /// Free-text title, or an http(s) URL whose title is fetched with yt-dlp
        text: String,
    },

    /// Tag the audio files of an existing album directory
    Tag {
        /// Directory holding the album's track files
        album_dir: PathBuf,

        #[command(flatten)]
        tags: TagArgs,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Lines up to the first empty one (or EOF).
pub fn read_until_blank<R: BufRead>(reader: R) -> io::Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// Track list text from `path`, or from stdin when no path is given.
pub fn read_track_list(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            eprintln!("Input one track per line as \"track name - hh:mm:ss\". Press return with no data to finish.");
            read_until_blank(io::stdin().lock())
        }
    }
}

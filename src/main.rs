use anyhow::Result;
use dotenvy::dotenv;

use doralbum::album::{AlbumCreator, AlbumRequest};
use doralbum::album_info::extract_album_info;
use doralbum::cli::{read_track_list, Cli, Commands};
use doralbum::core::{config, init_logger, log_configuration};
use doralbum::download::{parse_video_url, Downloader, YtDlpDownloader};
use doralbum::metadata::{LoftyTagger, Tagger};
use doralbum::segmentation::{extension_of, segmentation_plan};
use doralbum::timestamps::TimestampCache;

/// Main entry point
///
/// Parses CLI arguments and dispatches to the subcommand.
///
/// # Errors
/// Returns an error if logging can't be set up or the command fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH, cli.verbose)?;

    match cli.command {
        Commands::Create { url, tracks, tags } => {
            log_configuration();
            let request = AlbumRequest {
                url,
                tracks: read_track_list(tracks.tracks.as_deref())?,
                time_kind: tracks.time_kind(),
                tags: tags.album_tags(),
            };

            let creator = AlbumCreator::from_config();
            let report = creator.create(&request).await?;

            println!("\nThese are the tracks created:\n");
            for line in report.installed_listing() {
                println!("{}", line);
            }
            for track in &report.skipped {
                println!(" {} (already existed, skipped)", track.display());
            }
            println!("\nAlbum tracks reside in '{}'", report.album_dir.display());
            log::debug!("Timestamp cache: {:?}", creator.cache().stats());
        }
        Commands::Plan { tracks, album_file } => {
            let text = read_track_list(tracks.tracks.as_deref())?;
            let extension = album_file.as_deref().and_then(|path| extension_of(path));
            let plan = segmentation_plan(&text, tracks.time_kind(), extension.as_deref(), &TimestampCache::new())?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Title { text } => {
            let title = match parse_video_url(&text) {
                Ok(url) => YtDlpDownloader::default().video_title(&url).await?,
                Err(_) => text,
            };
            println!("{}", serde_json::to_string_pretty(&extract_album_info(&title))?);
        }
        Commands::Tag { album_dir, tags } => {
            let tagged = LoftyTagger::new().tag_album(&album_dir, &tags.album_tags())?;
            log::info!("Tagged {} files in {}", tagged.len(), album_dir.display());
        }
    }

    Ok(())
}

//! Process execution utilities with timeout support
//!
//! Provides helpers for running external processes (ffmpeg, yt-dlp) with
//! configurable timeouts so a hung process cannot block album creation.

use std::process::Output;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Failure to obtain a process' output.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to run process: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Run an async Command with a timeout.
///
/// The child is killed if it is still running when the timeout elapses.
pub async fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> Result<Output, ProcessError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(ProcessError::Io(e)),
        Err(_) => Err(ProcessError::Timeout(timeout)),
    }
}

/// Render a command line for logs.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|a| if a.contains(' ') { format!("'{}'", a) } else { a.clone() }))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_io_error() {
        let result = run_with_timeout(
            &mut Command::new("definitely-not-a-real-binary-doralbum"),
            Duration::from_secs(5),
        )
        .await;
        assert!(matches!(result, Err(ProcessError::Io(_))));
    }

    #[test]
    fn test_timeout_message() {
        let err = ProcessError::Timeout(Duration::from_secs(120));
        assert_eq!(err.to_string(), "Process timed out after 120s");
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let args = vec!["-i".to_string(), "/tmp/My Album.mp3".to_string()];
        assert_eq!(command_line("ffmpeg", &args), "ffmpeg -i '/tmp/My Album.mp3'");
    }
}

//! Cutting an album file into tracks.
//!
//! [`AudioSplitter`] is the seam between the plan and the actual audio tool;
//! [`FfmpegSplitter`] is the production implementation (stream copy, no
//! re-encoding).

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use super::SegmentationInstruction;
use crate::core::config;
use crate::core::process::{command_line, run_with_timeout, ProcessError};

/// Splitting failures
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("ffmpeg exited with code {exit_code:?} while writing '{output}': {stderr}")]
    Ffmpeg {
        output: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to run ffmpeg: {0}")]
    Io(#[from] std::io::Error),

    #[error("ffmpeg timed out after {}s while writing '{output}'", .timeout.as_secs())]
    Timeout { output: String, timeout: Duration },
}

/// Something that can copy `[start, end)` of `source` into `output`.
#[async_trait]
pub trait AudioSplitter: Send + Sync {
    /// `end_seconds == None` means until the end of the source.
    async fn split(
        &self,
        source: &Path,
        start_seconds: u32,
        end_seconds: Option<u32>,
        output: &Path,
    ) -> Result<(), SplitError>;
}

/// ffmpeg-backed splitter.
#[derive(Debug, Clone)]
pub struct FfmpegSplitter {
    bin: String,
    timeout: Duration,
}

impl Default for FfmpegSplitter {
    fn default() -> Self {
        Self::new(config::FFMPEG_BIN.as_str(), config::segmentation::timeout())
    }
}

impl FfmpegSplitter {
    pub fn new(bin: impl Into<String>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    /// `-y -i SRC -acodec copy -ss START [-to END] OUT`
    pub fn arguments(source: &Path, start_seconds: u32, end_seconds: Option<u32>, output: &Path) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-i".to_string(),
            source.to_string_lossy().into_owned(),
            "-acodec".to_string(),
            "copy".to_string(),
            "-ss".to_string(),
            start_seconds.to_string(),
        ];
        if let Some(end) = end_seconds {
            args.push("-to".to_string());
            args.push(end.to_string());
        }
        args.push(output.to_string_lossy().into_owned());
        args
    }
}

#[async_trait]
impl AudioSplitter for FfmpegSplitter {
    async fn split(
        &self,
        source: &Path,
        start_seconds: u32,
        end_seconds: Option<u32>,
        output: &Path,
    ) -> Result<(), SplitError> {
        let args = Self::arguments(source, start_seconds, end_seconds, output);
        log::debug!("Running {}", command_line(&self.bin, &args));

        let result = run_with_timeout(Command::new(&self.bin).args(&args), self.timeout).await;
        let output_display = output.display().to_string();
        let out = match result {
            Ok(out) => out,
            Err(ProcessError::Io(e)) => return Err(SplitError::Io(e)),
            Err(ProcessError::Timeout(timeout)) => {
                return Err(SplitError::Timeout {
                    output: output_display,
                    timeout,
                })
            }
        };

        if !out.status.success() {
            return Err(SplitError::Ffmpeg {
                output: output_display,
                exit_code: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Runs every instruction in order, writing into `target_dir`.
///
/// Stops at the first failure; files already written are left in place.
/// Returns the written paths in plan order.
pub async fn segment_album(
    splitter: &dyn AudioSplitter,
    source: &Path,
    plan: &[SegmentationInstruction],
    target_dir: &Path,
) -> Result<Vec<PathBuf>, SplitError> {
    log::info!(
        "Splitting {} into {} tracks under {}",
        source.display(),
        plan.len(),
        target_dir.display()
    );

    let mut written = Vec::with_capacity(plan.len());
    for instruction in plan {
        let output = target_dir.join(&instruction.output_name);
        splitter
            .split(source, instruction.start_seconds, instruction.end_seconds, &output)
            .await?;
        log::info!("✅ {}", instruction.output_name);
        written.push(output);
    }
    Ok(written)
}

pub mod watermark;
pub mod ytdlp;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    errors::{BotResult, TranscodeError},
    work_dir::WorkDir,
};

pub use watermark::Ffmpeg;
pub use ytdlp::YtDlp;

/// A downloaded video living inside its own work directory.
///
/// Dropping it removes the directory and every file in it.
#[derive(Debug)]
pub struct FetchedVideo {
    pub work_dir: WorkDir,
    pub path: PathBuf,
    pub title: Option<String>,
}

#[async_trait]
pub trait VideoSource: Send + Sync {
    /// `Ok(None)` when nothing could be extracted from `url`.
    async fn fetch(&self, url: &str) -> BotResult<Option<FetchedVideo>>;
}

#[async_trait]
pub trait WatermarkRemover: Send + Sync {
    /// Writes a cropped copy of `input` to `output` and returns `output`.
    async fn remove_watermark(&self, input: &Path, output: &Path)
    -> Result<PathBuf, TranscodeError>;
}

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use async_trait::async_trait;
use tokio::process;

use crate::{errors::TranscodeError, video::WatermarkRemover};

/// Height of the band cropped off the bottom of every frame
pub const WATERMARK_BAND_PX: u32 = 50;

pub struct Ffmpeg {
    bin: String,
}

impl Ffmpeg {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    fn command(&self, input: &Path, output: &Path) -> process::Command {
        let mut cmd = process::Command::new(&self.bin);
        cmd.arg("-i")
            .arg(input)
            .args(["-vf", &format!("crop=iw:ih-{WATERMARK_BAND_PX}:0:0")])
            .args(["-c:a", "copy"])
            .arg(output)
            .arg("-y")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl WatermarkRemover for Ffmpeg {
    async fn remove_watermark(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<PathBuf, TranscodeError> {
        log::debug!("Cropping {} into {}", input.display(), output.display());

        let result = self.command(input, output).output().await?;

        if !result.status.success() {
            return Err(TranscodeError::FfmpegFailed(
                result.status,
                String::from_utf8_lossy(&result.stderr).into_owned(),
            ));
        }

        Ok(output.to_path_buf())
    }
}

/// `dir/abc123.mp4` becomes `dir/abc123_nowm.mp4`.
pub fn cropped_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_owned());

    input.with_file_name(format!("{stem}_nowm.mp4"))
}

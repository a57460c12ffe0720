use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use tokio::{fs, process};

use crate::{
    errors::{BotError, BotResult},
    utils::sanitize_file_stem,
    video::{FetchedVideo, VideoSource},
    work_dir::WorkDir,
};

/// Prefer an mp4 container, otherwise whatever is best.
const FORMAT: &str = "best[ext=mp4]/best";

#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    id: Option<String>,
    title: Option<String>,
}

pub struct YtDlp {
    bin: String,
    work_root: PathBuf,
}

impl YtDlp {
    pub fn new(bin: impl Into<String>, work_root: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            work_root: work_root.into(),
        }
    }

    fn base_command(&self) -> process::Command {
        let mut cmd = process::Command::new(&self.bin);
        cmd.arg("--no-playlist")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--ignore-errors")
            .arg("--no-check-certificates");
        cmd
    }

    fn info_command(&self, url: &str) -> process::Command {
        let mut cmd = self.base_command();
        cmd.arg("-J").arg("--").arg(url);
        cmd
    }

    fn download_command(&self, url: &str, output: &Path) -> process::Command {
        let mut cmd = self.base_command();
        cmd.args(["-f", FORMAT])
            .arg("-o")
            .arg(output)
            .arg("--")
            .arg(url);
        cmd
    }

    /// Metadata only, nothing is downloaded.
    async fn extract_info(&self, url: &str) -> BotResult<Option<YtDlpInfo>> {
        log::debug!("{} -J {}", self.bin, url);
        let output = self
            .info_command(url)
            .output()
            .await
            .map_err(|e| BotError::external_command_error(&self.bin, e.to_string()))?;

        if !output.status.success() {
            log::warn!(
                "yt-dlp could not extract {}: {}",
                url,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        parse_info(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Empty output or a JSON `null` means the extractor found nothing.
fn parse_info(json: &str) -> BotResult<Option<YtDlpInfo>> {
    let json = json.trim();
    if json.is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<YtDlpInfo>>(json)?)
}

#[async_trait]
impl VideoSource for YtDlp {
    async fn fetch(&self, url: &str) -> BotResult<Option<FetchedVideo>> {
        let Some(info) = self.extract_info(url).await? else {
            return Ok(None);
        };

        let work_dir = WorkDir::create(&self.work_root).await?;
        let stem = sanitize_file_stem(info.id.as_deref().unwrap_or_default());
        let path = work_dir.path().join(format!("{stem}.mp4"));

        info!("Starting download: {} -> {}", url, path.display());

        let output = self
            .download_command(url, &path)
            .output()
            .await
            .map_err(|e| BotError::external_command_error(&self.bin, e.to_string()))?;

        info!("yt-dlp exit code: {:?}", output.status.code());

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            log::error!("yt-dlp failed: {}", stderr);
            return Err(BotError::download_error(stderr));
        }

        if !fs::try_exists(&path).await? {
            return Err(BotError::download_error(format!(
                "yt-dlp produced no file at {}",
                path.display()
            )));
        }

        Ok(Some(FetchedVideo {
            work_dir,
            path,
            title: info.title,
        }))
    }
}

use std::{path::Path, sync::Arc};

use log::info;
use teloxide::prelude::*;
use tokio::fs;

use crate::{
    errors::{BotError, BotResult, DEFAULT_CAPTION, HandlerResult, UserNotice},
    reply::{ChatReply, TelegramReply},
    utils::{caption_for, is_watermarked_link},
    video::{FetchedVideo, VideoSource, WatermarkRemover, watermark::cropped_path},
};

/// Turns a link into a video reply: fetch, crop if needed, send, clean up.
pub struct VideoPipeline {
    source: Arc<dyn VideoSource>,
    watermark: Arc<dyn WatermarkRemover>,
}

impl VideoPipeline {
    pub fn new(source: Arc<dyn VideoSource>, watermark: Arc<dyn WatermarkRemover>) -> Self {
        Self { source, watermark }
    }

    /// Never fails because of the download itself; the user gets one notice
    /// per failed request. Errors only escape when that notice can't be sent.
    pub async fn handle(&self, text: &str, reply: &dyn ChatReply) -> HandlerResult {
        let url = text.trim();
        info!("Link received: {}", url);

        match self.process(url, reply).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("Error handling {}: {}", url, e);
                reply.send_text(&e.user_notice().to_string()).await
            }
        }
    }

    async fn process(&self, url: &str, reply: &dyn ChatReply) -> BotResult<()> {
        reply.send_text(&UserNotice::DownloadStarted.to_string()).await?;

        let Some(video) = self.source.fetch(url).await? else {
            info!("Nothing extracted from {}", url);
            reply.send_text(&UserNotice::NotFound.to_string()).await?;
            return Ok(());
        };

        let FetchedVideo {
            work_dir,
            mut path,
            title,
        } = video;
        info!("Fetched {} into {}", url, path.display());

        if is_watermarked_link(url) {
            let cropped = self
                .watermark
                .remove_watermark(&path, &cropped_path(&path))
                .await?;
            remove_quietly(&path).await;
            info!("Watermark removed: {}", cropped.display());
            path = cropped;
        }

        let caption = caption_for(title.as_deref(), DEFAULT_CAPTION);
        reply.send_video(&path, &caption).await?;
        info!("Delivered {}", path.display());

        remove_quietly(&path).await;
        drop(work_dir);
        Ok(())
    }
}

/// The work dir guard removes leftovers anyway, so a failed delete only gets logged.
async fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        log::warn!("Failed to remove {}: {}", path.display(), e);
    }
}

pub async fn link_received(bot: Bot, msg: Message, pipeline: Arc<VideoPipeline>) -> HandlerResult {
    let text = msg
        .text()
        .ok_or_else(|| BotError::Parse("text message without text".to_owned()))?;

    let reply = TelegramReply::new(bot, msg.chat.id);
    pipeline.handle(text, &reply).await
}

use std::path::Path;

use async_trait::async_trait;
use teloxide::{prelude::*, types::InputFile};

use crate::errors::HandlerResult;

/// Reply channel back to the chat a request came from.
#[async_trait]
pub trait ChatReply: Send + Sync {
    async fn send_text(&self, text: &str) -> HandlerResult;

    async fn send_video(&self, path: &Path, caption: &str) -> HandlerResult;
}

pub struct TelegramReply {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramReply {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ChatReply for TelegramReply {
    async fn send_text(&self, text: &str) -> HandlerResult {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_video(&self, path: &Path, caption: &str) -> HandlerResult {
        self.bot
            .send_video(self.chat_id, InputFile::file(path))
            .caption(caption)
            .supports_streaming(true)
            .await?;
        Ok(())
    }
}

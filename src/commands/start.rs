use teloxide::prelude::*;

use crate::errors::{HandlerResult, UserNotice};

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, UserNotice::Greeting.to_string()).await?;
    Ok(())
}

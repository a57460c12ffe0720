use teloxide::prelude::*;

use crate::errors::{HandlerResult, UserNotice};

pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, UserNotice::Help.to_string()).await?;
    Ok(())
}

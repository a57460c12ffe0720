use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{
    commands::{help, start},
    errors::BotError,
    handlers::link_received,
};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Greeting
    Start,
    /// How to use the bot
    Help,
}

/// Commands are not links, even unknown ones.
pub fn is_link_candidate(text: &str) -> bool {
    !text.trim_start().starts_with('/')
}

pub fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    Update::filter_message()
        .branch(
            teloxide::filter_command::<Command, _>()
                .branch(case![Command::Start].endpoint(start))
                .branch(case![Command::Help].endpoint(help)),
        )
        .branch(
            Message::filter_text()
                .filter(|text: String| is_link_candidate(&text))
                .endpoint(link_received),
        )
}

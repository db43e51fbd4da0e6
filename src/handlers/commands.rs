use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::dialogue::Input;
use crate::handlers::utils::send_reply;

use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(user) = msg.from.as_ref() else {
        log::warn!("Command without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let input = match cmd {
        Command::Start => {
            log::info!("🚀 /start from user {}", user.id);
            Input::Start
        }
        Command::Help => Input::Help,
        Command::Cancel => Input::Cancel,
    };

    let reply = state.process(user.id, input).await;
    send_reply(&bot, msg.chat.id, reply).await?;
    Ok(())
}

use teloxide::prelude::*;
use std::error::Error;

use crate::bot_state::BotState;
use crate::dialogue::Input;
use crate::handlers::utils::send_reply;

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(user) = msg.from.as_ref() else {
        log::warn!("Message without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let Some(input) = Input::from_message(msg.text()) else {
        // commands are handled in command_handler
        log::debug!("Skipping unknown command from user {}", user.id);
        return Ok(());
    };

    let reply = state.process(user.id, input).await;

    send_reply(&bot, msg.chat.id, reply).await?;
    Ok(())
}

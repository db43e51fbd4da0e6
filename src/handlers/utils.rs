use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};

use crate::dialogue::{Keyboard, MenuAction, Reply};

/// Main menu: one button per row, in menu order.
pub fn main_menu_keyboard() -> ReplyMarkup {
    let rows = MenuAction::ALL
        .into_iter()
        .map(|action| vec![KeyboardButton::new(action.label())])
        .collect::<Vec<_>>();

    ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard())
}

pub fn reply_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::MainMenu => Some(main_menu_keyboard()),
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        Keyboard::Keep => None,
    }
}

/// Sends a state-machine reply, attaching the keyboard it asks for.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<Message> {
    let request = bot.send_message(chat_id, reply.text);
    match reply_markup(reply.keyboard) {
        Some(markup) => request.reply_markup(markup).await,
        None => request.await,
    }
}

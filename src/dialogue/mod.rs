//! Per-user conversation flow: input classification, the state machine and its replies.

pub mod errors;
pub mod input;
pub mod machine;
pub mod replies;

pub use input::{Input, MenuAction};
pub use machine::ConversationMachine;
pub use replies::{Keyboard, Reply};

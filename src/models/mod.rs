pub mod conversation;
pub mod food;
pub mod profile;

pub use conversation::{ConversationState, Dialogue, Scratch};
pub use food::FoodLookupResult;
pub use profile::Profile;

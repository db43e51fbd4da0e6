use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use teloxide::types::UserId;
use tokio::sync::{Mutex, RwLock};

use crate::dialogue::{ConversationMachine, Input, Reply};
use crate::gateways::Gateways;
use crate::models::Dialogue;
use crate::store::ProfileStore;

type DialogueSlot = Arc<Mutex<Dialogue>>;
type DialogueMap = Arc<RwLock<HashMap<UserId, DialogueSlot>>>;

/// Shared bot state handed to every handler. Each user gets their own dialogue slot;
/// a turn holds that slot's lock until it finishes, so turns of one user never interleave.
#[derive(Clone)]
pub struct BotState {
    machine: Arc<ConversationMachine>,
    dialogues: DialogueMap,
}

impl BotState {
    pub fn new(gateways: Gateways) -> Self {
        Self {
            machine: Arc::new(ConversationMachine::new(ProfileStore::new(), gateways)),
            dialogues: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[cfg(test)]
    pub fn profiles(&self) -> &ProfileStore {
        self.machine.profiles()
    }

    /// Runs one turn for the user and returns the reply to send.
    pub async fn process(&self, user_id: UserId, input: Input<'_>) -> Reply {
        let start_time = Instant::now();
        let slot = self.slot(user_id).await;
        let mut dialogue = slot.lock().await;

        let current = std::mem::take(&mut *dialogue);
        let from = current.state;
        let transition = self.machine.handle(user_id, input, current).await;
        *dialogue = transition.dialogue;

        log::debug!(
            "🔀 User {}: {:?} -> {:?} in {:?}",
            user_id,
            from,
            dialogue.state,
            start_time.elapsed()
        );

        transition.reply
    }

    #[cfg(test)]
    pub async fn current_state(&self, user_id: UserId) -> crate::models::ConversationState {
        let slot = self.slot(user_id).await;
        let dialogue = slot.lock().await;
        dialogue.state
    }

    #[cfg(test)]
    pub async fn known_users(&self) -> usize {
        self.dialogues.read().await.len()
    }

    async fn slot(&self, user_id: UserId) -> DialogueSlot {
        {
            let dialogues = self.dialogues.read().await;
            if let Some(slot) = dialogues.get(&user_id) {
                return slot.clone();
            }
        }

        let mut dialogues = self.dialogues.write().await;
        dialogues
            .entry(user_id)
            .or_insert_with(|| {
                log::debug!("👋 New conversation for user {}", user_id);
                Arc::new(Mutex::new(Dialogue::idle()))
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::MenuAction;
    use crate::gateways::testing::{gateways, MockClimate, MockNutrition};
    use crate::models::ConversationState;

    fn state() -> BotState {
        let (gateways, _, _) = gateways(
            MockClimate::default().with_city("Lima", 18.0),
            MockNutrition::default(),
        );
        BotState::new(gateways)
    }

    async fn set_profile(state: &BotState, user: UserId, weight: &str) {
        for text in ["Set Profile", weight, "175", "35", "20", "Lima"] {
            state.process(user, Input::from_text(text)).await;
        }
    }

    #[tokio::test]
    async fn first_contact_starts_idle() {
        let state = state();
        assert_eq!(state.current_state(UserId(1)).await, ConversationState::Idle);
        assert_eq!(state.known_users().await, 1);
    }

    #[tokio::test]
    async fn state_persists_between_turns() {
        let state = state();
        state.process(UserId(1), Input::Menu(MenuAction::SetProfile)).await;
        state.process(UserId(1), Input::Text("80")).await;
        assert_eq!(state.current_state(UserId(1)).await, ConversationState::AwaitingHeight);
    }

    #[tokio::test]
    async fn users_keep_separate_dialogues_and_profiles() {
        let state = state();
        state.process(UserId(1), Input::Menu(MenuAction::SetProfile)).await;
        set_profile(&state, UserId(2), "60").await;

        assert_eq!(state.current_state(UserId(1)).await, ConversationState::AwaitingWeight);
        assert_eq!(state.current_state(UserId(2)).await, ConversationState::Idle);
        assert!(state.profiles().get(UserId(1)).await.is_none());
        assert_eq!(state.profiles().get(UserId(2)).await.unwrap().weight_kg, 60.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_turns_of_one_user_are_serialized() {
        let state = state();
        let user = UserId(5);
        set_profile(&state, user, "70").await;
        state.process(user, Input::Menu(MenuAction::LogWater)).await;

        // only the first turn finds the bot waiting for an amount; the rest see Idle
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move { state.process(user, Input::Text("100")).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(state.profiles().get(user).await.unwrap().logged_water_ml, 100);
        assert_eq!(state.current_state(user).await, ConversationState::Idle);
    }
}

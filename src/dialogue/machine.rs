use teloxide::types::UserId;

use super::errors::{non_empty, parse_count, parse_positive_count, parse_positive_decimal, Field, FlowError};
use super::input::{Input, MenuAction};
use super::replies::{self, Reply};
use crate::gateways::Gateways;
use crate::goals::DEFAULT_AMBIENT_TEMP_C;
use crate::models::{ConversationState, Dialogue, Profile, Scratch};
use crate::store::ProfileStore;

/// Outcome of one turn: the dialogue to keep for the user and the message to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub dialogue: Dialogue,
    pub reply: Reply,
}

impl Transition {
    fn idle(reply: Reply) -> Self {
        Self { dialogue: Dialogue::idle(), reply }
    }

    fn to(state: ConversationState, scratch: Scratch, reply: Reply) -> Self {
        Self { dialogue: Dialogue::with_scratch(state, scratch), reply }
    }
}

type StepResult = Result<Transition, FlowError>;

/// Conversation state machine. Holds no per-user data itself: the caller passes the
/// user's current dialogue in and stores the returned one.
pub struct ConversationMachine {
    profiles: ProfileStore,
    gateways: Gateways,
}

impl ConversationMachine {
    pub fn new(profiles: ProfileStore, gateways: Gateways) -> Self {
        Self { profiles, gateways }
    }

    #[cfg(test)]
    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub async fn handle(&self, user_id: UserId, input: Input<'_>, dialogue: Dialogue) -> Transition {
        let result = match input {
            Input::Start => Ok(Transition::idle(Reply::menu(replies::WELCOME))),
            Input::Cancel => Ok(Transition::idle(Reply::menu(replies::CANCELLED))),
            Input::Help => Ok(help(dialogue.clone())),
            Input::NonText => Ok(non_text(dialogue.clone())),
            Input::Menu(action) => self.start(user_id, action).await,
            Input::Text(text) => self.advance(user_id, text, &dialogue).await,
        };

        result.unwrap_or_else(|err| recover(user_id, err, dialogue))
    }

    /// Entry point of every menu action. Any scratch in progress is dropped.
    async fn start(&self, user_id: UserId, action: MenuAction) -> StepResult {
        use ConversationState::*;

        match action {
            MenuAction::SetProfile => Ok(Transition::to(
                AwaitingWeight,
                Scratch::default(),
                Reply::remove(replies::ASK_WEIGHT),
            )),
            MenuAction::LogWater => {
                self.require_profile(user_id).await?;
                Ok(Transition::to(AwaitingWaterAmount, Scratch::default(), Reply::remove(replies::ASK_WATER)))
            }
            MenuAction::LogFood => {
                self.require_profile(user_id).await?;
                Ok(Transition::to(AwaitingFoodName, Scratch::default(), Reply::remove(replies::ASK_FOOD_TO_LOG)))
            }
            MenuAction::CheckFoodInfo => Ok(Transition::to(
                AwaitingFoodInfoQuery,
                Scratch::default(),
                Reply::remove(replies::ASK_FOOD_TO_CHECK),
            )),
            MenuAction::CheckProgress => {
                let profile = self.profiles.get(user_id).await.ok_or(FlowError::PrerequisiteMissing)?;
                Ok(Transition::idle(Reply::menu(replies::progress_report(&profile))))
            }
        }
    }

    /// Free text is interpreted according to the input the current state waits for.
    async fn advance(&self, user_id: UserId, text: &str, dialogue: &Dialogue) -> StepResult {
        use ConversationState::*;

        let scratch = &dialogue.scratch;
        match dialogue.state {
            Idle => Ok(Transition::idle(Reply::menu(replies::FALLBACK))),
            AwaitingWeight => {
                let weight = parse_positive_decimal(text, Field::Weight)?;
                Ok(Transition::to(AwaitingHeight, scratch.with_weight(weight), Reply::keep(replies::ASK_HEIGHT)))
            }
            AwaitingHeight => {
                let height = parse_positive_decimal(text, Field::Height)?;
                Ok(Transition::to(AwaitingAge, scratch.with_height(height), Reply::keep(replies::ASK_AGE)))
            }
            AwaitingAge => {
                let age = parse_positive_count(text, Field::Age)?;
                Ok(Transition::to(AwaitingActivity, scratch.with_age(age), Reply::keep(replies::ASK_ACTIVITY)))
            }
            AwaitingActivity => {
                let activity = parse_count(text, Field::Activity)?;
                Ok(Transition::to(AwaitingCity, scratch.with_activity(activity), Reply::keep(replies::ASK_CITY)))
            }
            AwaitingCity => self.commit_profile(user_id, text, scratch).await,
            AwaitingWaterAmount => self.log_water(user_id, text).await,
            AwaitingFoodName => self.find_food_to_log(text, scratch).await,
            AwaitingFoodAmount => self.log_food(user_id, text, scratch).await,
            AwaitingFoodInfoQuery => self.food_info(text).await,
        }
    }

    async fn commit_profile(&self, user_id: UserId, text: &str, scratch: &Scratch) -> StepResult {
        let city = non_empty(text, Field::City)?;

        let (Some(weight), Some(height), Some(age), Some(activity)) =
            (scratch.weight, scratch.height, scratch.age, scratch.activity)
        else {
            return Err(FlowError::InternalInconsistency("profile fields missing at city step"));
        };

        let temperature = match self.gateways.climate.current_temperature(city).await {
            Some(temp) => temp,
            None => {
                log::warn!("No temperature for '{}', using {}°C", city, DEFAULT_AMBIENT_TEMP_C);
                DEFAULT_AMBIENT_TEMP_C
            }
        };

        let profile = Profile::new(weight, height, age, activity, city.to_string(), temperature);
        let summary = replies::profile_summary(&profile);
        log::info!(
            "✅ Profile set for user {}: water {} ml, calories {} kcal",
            user_id,
            profile.water_goal_ml,
            profile.calorie_goal_kcal
        );
        self.profiles.upsert(user_id, profile).await;

        Ok(Transition::idle(Reply::menu(summary)))
    }

    async fn log_water(&self, user_id: UserId, text: &str) -> StepResult {
        self.require_profile(user_id).await?;
        let amount = parse_count(text, Field::WaterAmount)?;

        let (total, remaining) = self
            .profiles
            .mutate(user_id, |p| {
                let remaining = p.log_water(amount);
                (p.logged_water_ml, remaining)
            })
            .await
            .ok_or(FlowError::PrerequisiteMissing)?;

        log::info!("💧 User {} logged {} ml, {} ml to go", user_id, amount, remaining);
        Ok(Transition::idle(Reply::menu(replies::water_logged(amount, total, remaining))))
    }

    async fn find_food_to_log(&self, text: &str, scratch: &Scratch) -> StepResult {
        let query = non_empty(text, Field::FoodName)?;
        let food = self
            .gateways
            .nutrition
            .lookup(query)
            .await
            .ok_or_else(|| FlowError::LookupNotFound { query: query.to_string() })?;

        let reply = Reply::keep(replies::food_found(&food));
        Ok(Transition::to(ConversationState::AwaitingFoodAmount, scratch.with_food(food), reply))
    }

    async fn log_food(&self, user_id: UserId, text: &str, scratch: &Scratch) -> StepResult {
        let grams = parse_count(text, Field::FoodAmount)?;
        let food = scratch
            .current_food
            .as_ref()
            .ok_or(FlowError::InternalInconsistency("food amount step reached without a lookup result"))?;

        let entry_kcal = food.calories_for(grams);
        let total_kcal = self
            .profiles
            .mutate(user_id, |p| {
                p.log_calories(entry_kcal);
                p.logged_calories_kcal
            })
            .await
            .ok_or(FlowError::PrerequisiteMissing)?;

        log::info!("🍽️ User {} logged {} g of {} ({:.1} kcal)", user_id, grams, food.name, entry_kcal);
        Ok(Transition::idle(Reply::menu(replies::food_logged(food, grams, entry_kcal, total_kcal))))
    }

    async fn food_info(&self, text: &str) -> StepResult {
        let query = non_empty(text, Field::FoodQuery)?;
        let food = self
            .gateways
            .nutrition
            .lookup(query)
            .await
            .ok_or_else(|| FlowError::LookupNotFound { query: query.to_string() })?;

        Ok(Transition::idle(Reply::menu(replies::food_info(&food))))
    }

    async fn require_profile(&self, user_id: UserId) -> Result<(), FlowError> {
        if self.profiles.contains(user_id).await {
            Ok(())
        } else {
            Err(FlowError::PrerequisiteMissing)
        }
    }
}

fn help(dialogue: Dialogue) -> Transition {
    let reply = if dialogue.state == ConversationState::Idle {
        Reply::menu(replies::HELP)
    } else {
        Reply::keep(replies::HELP)
    };
    Transition { dialogue, reply }
}

/// Nothing to parse: mid-flow the user keeps the current prompt and keyboard.
fn non_text(dialogue: Dialogue) -> Transition {
    if dialogue.state == ConversationState::Idle {
        Transition::idle(Reply::menu(replies::FALLBACK))
    } else {
        Transition { dialogue, reply: Reply::keep(replies::TEXT_EXPECTED) }
    }
}

/// Maps a failed step to the reply and state the user continues from.
fn recover(user_id: UserId, err: FlowError, previous: Dialogue) -> Transition {
    match err {
        FlowError::InvalidInput { field, .. } => {
            log::warn!("User {}: {}", user_id, err);
            Transition { dialogue: previous, reply: Reply::keep(field.reprompt()) }
        }
        FlowError::LookupNotFound { .. } => {
            log::warn!("User {}: {}", user_id, err);
            if previous.state == ConversationState::AwaitingFoodName {
                Transition { dialogue: previous, reply: Reply::keep(replies::FOOD_NOT_FOUND_RETRY) }
            } else {
                Transition::idle(Reply::menu(replies::PRODUCT_NOT_FOUND))
            }
        }
        FlowError::PrerequisiteMissing => {
            log::warn!("User {}: {}", user_id, err);
            Transition::idle(Reply::menu(replies::SET_PROFILE_FIRST))
        }
        FlowError::InternalInconsistency(_) => {
            log::error!("User {}: {}", user_id, err);
            Transition::idle(Reply::menu(replies::GENERIC_FAILURE))
        }
    }
}

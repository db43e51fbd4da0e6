use super::FoodLookupResult;

/// Where a user is in the conversation; each variant names the input the bot waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingWeight,
    AwaitingHeight,
    AwaitingAge,
    AwaitingActivity,
    AwaitingCity,
    AwaitingWaterAmount,
    AwaitingFoodName,
    AwaitingFoodAmount,
    AwaitingFoodInfoQuery,
}

/// Fields collected across a multi-step flow before they are committed.
///
/// The record is never changed in place: every `with_*` call returns an updated copy,
/// so a failed step leaves the previous scratch untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scratch {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub activity: Option<u32>,
    pub current_food: Option<FoodLookupResult>,
}

impl Scratch {
    pub fn with_weight(&self, weight: f64) -> Self {
        Self { weight: Some(weight), ..self.clone() }
    }

    pub fn with_height(&self, height: f64) -> Self {
        Self { height: Some(height), ..self.clone() }
    }

    pub fn with_age(&self, age: u32) -> Self {
        Self { age: Some(age), ..self.clone() }
    }

    pub fn with_activity(&self, activity: u32) -> Self {
        Self { activity: Some(activity), ..self.clone() }
    }

    pub fn with_food(&self, food: FoodLookupResult) -> Self {
        Self { current_food: Some(food), ..self.clone() }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-user conversation: current state plus the scratch gathered so far.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dialogue {
    pub state: ConversationState,
    pub scratch: Scratch,
}

impl Dialogue {
    pub fn idle() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn at(state: ConversationState) -> Self {
        Self { state, scratch: Scratch::default() }
    }

    pub fn with_scratch(state: ConversationState, scratch: Scratch) -> Self {
        Self { state, scratch }
    }
}

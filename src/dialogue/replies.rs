use crate::models::{FoodLookupResult, Profile};

/// What to do with the user's reply keyboard alongside a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Show the five main-menu buttons.
    MainMenu,
    /// Hide the keyboard while free-form input is expected.
    Remove,
    /// Leave whatever the user currently sees.
    Keep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn menu(text: impl Into<String>) -> Self {
        Self { text: text.into(), keyboard: Keyboard::MainMenu }
    }

    pub fn remove(text: impl Into<String>) -> Self {
        Self { text: text.into(), keyboard: Keyboard::Remove }
    }

    pub fn keep(text: impl Into<String>) -> Self {
        Self { text: text.into(), keyboard: Keyboard::Keep }
    }
}

pub const WELCOME: &str = "Welcome! Use the buttons below to interact with the bot.";
pub const HELP: &str = "Buttons:\n\
    Set Profile – enter weight, height, age, activity and city to get daily goals\n\
    Log Water – add water you drank\n\
    Log Food – look up a food and add its calories\n\
    Check Food Info – see calories of a food without logging it\n\
    Check Progress – compare today's intake with your goals\n\n\
    Commands:\n\
    /start – show the menu\n\
    /cancel – abort the current step\n\
    /help – show this message";
pub const CANCELLED: &str = "Cancelled. Choose what to do next.";
pub const TEXT_EXPECTED: &str = "Please answer with a text message.";
pub const FALLBACK: &str = "I didn't understand that. Use the buttons to interact with the bot.";
pub const SET_PROFILE_FIRST: &str = "Please set your profile first using the 'Set Profile' button.";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const FOOD_NOT_FOUND_RETRY: &str = "Could not find information about this food. Try another name.";
pub const PRODUCT_NOT_FOUND: &str = "Could not find information about this product. Try another name.";

pub const ASK_WEIGHT: &str = "Enter your weight (kg):";
pub const ASK_HEIGHT: &str = "Enter your height (cm):";
pub const ASK_AGE: &str = "Enter your age:";
pub const ASK_ACTIVITY: &str = "How many minutes of activity do you have per day?";
pub const ASK_CITY: &str = "Which city do you live in?";
pub const ASK_WATER: &str = "How many milliliters of water did you drink?";
pub const ASK_FOOD_TO_LOG: &str = "Enter the name of the food you'd like to log:";
pub const ASK_FOOD_TO_CHECK: &str = "Enter the name of the food you'd like to check:";

pub fn profile_summary(profile: &Profile) -> String {
    format!(
        "Profile set!\n\n\
        Weight: {} kg\n\
        Height: {} cm\n\
        Age: {}\n\
        Activity: {} min/day\n\
        City: {}\n\
        Temperature: {:.1}°C\n\n\
        Your daily goals:\n\
        Water: {} ml/day\n\
        Calories: {} kcal/day",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.daily_activity_minutes,
        profile.city,
        profile.ambient_temp_c,
        profile.water_goal_ml,
        profile.calorie_goal_kcal,
    )
}

pub fn progress_report(profile: &Profile) -> String {
    format!(
        "Progress:\n\n\
        Water:\n\
        Consumed: {} ml / {} ml\n\n\
        Calories:\n\
        Consumed: {:.1} kcal / {} kcal\n\
        Burned: {:.1} kcal\n\n\
        Tracking since {}",
        profile.logged_water_ml,
        profile.water_goal_ml,
        profile.logged_calories_kcal,
        profile.calorie_goal_kcal,
        profile.burned_calories_kcal,
        profile.created_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

pub fn water_logged(amount_ml: u32, total_ml: u32, remaining_ml: u32) -> String {
    if remaining_ml == 0 {
        format!("Great! You've reached your water goal: {} ml.", total_ml)
    } else {
        format!("Logged: {} ml. Remaining: {} ml.", amount_ml, remaining_ml)
    }
}

pub fn food_found(food: &FoodLookupResult) -> String {
    format!(
        "Found: {}\nCalories per 100g: {} kcal.\nHow many grams did you consume?",
        food.name, food.calories_per_100g
    )
}

pub fn food_logged(food: &FoodLookupResult, grams: u32, entry_kcal: f64, total_kcal: f64) -> String {
    format!(
        "Logged: {} ({}g)\nTotal Calories: {:.1} kcal.\nYour updated total: {:.1} kcal.",
        food.name, grams, entry_kcal, total_kcal
    )
}

pub fn food_info(food: &FoodLookupResult) -> String {
    format!(
        "Product: {}\nCalories per 100g: {} kcal.",
        food.name, food.calories_per_100g
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_reply_switches_to_goal_message_at_zero() {
        assert_eq!(water_logged(250, 1000, 1600), "Logged: 250 ml. Remaining: 1600 ml.");
        assert_eq!(
            water_logged(500, 2700, 0),
            "Great! You've reached your water goal: 2700 ml."
        );
    }

    #[test]
    fn summary_lists_fields_and_goals() {
        let profile = Profile::new(70.0, 170.0, 30, 45, "Rome".to_string(), 20.0);
        let text = profile_summary(&profile);
        assert!(text.contains("Weight: 70 kg"));
        assert!(text.contains("City: Rome"));
        assert!(text.contains("Temperature: 20.0°C"));
        assert!(text.contains("Water: 2600 ml/day"));
        assert!(text.contains("Calories: 1812 kcal/day"));
    }

    #[test]
    fn food_texts_keep_fractional_calories() {
        let food = FoodLookupResult {
            name: "Oats".to_string(),
            calories_per_100g: 379.5,
        };
        assert!(food_found(&food).contains("Calories per 100g: 379.5 kcal."));
        assert_eq!(
            food_logged(&food, 40, 151.8, 400.24),
            "Logged: Oats (40g)\nTotal Calories: 151.8 kcal.\nYour updated total: 400.2 kcal."
        );
    }
}

use chrono::{DateTime, Utc};

use crate::goals;

/// Committed biometric profile with its daily goals and the intake logged so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub daily_activity_minutes: u32,
    pub city: String,
    pub ambient_temp_c: f64,
    pub water_goal_ml: u32,
    pub calorie_goal_kcal: i64,
    pub logged_water_ml: u32,
    pub logged_calories_kcal: f64,
    pub burned_calories_kcal: f64,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Builds a fresh profile, deriving both goals from the entered fields.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        daily_activity_minutes: u32,
        city: String,
        ambient_temp_c: f64,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            daily_activity_minutes,
            city,
            ambient_temp_c,
            water_goal_ml: goals::water_goal_ml(weight_kg, daily_activity_minutes, ambient_temp_c),
            calorie_goal_kcal: goals::calorie_goal_kcal(
                weight_kg,
                height_cm,
                age_years,
                daily_activity_minutes,
            ),
            logged_water_ml: 0,
            logged_calories_kcal: 0.0,
            burned_calories_kcal: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Adds water and returns what is left to reach the goal, never below zero.
    pub fn log_water(&mut self, amount_ml: u32) -> u32 {
        self.logged_water_ml = self.logged_water_ml.saturating_add(amount_ml);
        self.remaining_water_ml()
    }

    pub fn remaining_water_ml(&self) -> u32 {
        self.water_goal_ml.saturating_sub(self.logged_water_ml)
    }

    pub fn log_calories(&mut self, kcal: f64) {
        self.logged_calories_kcal += kcal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile::new(70.0, 170.0, 30, 45, "Berlin".to_string(), 20.0)
    }

    #[test]
    fn new_profile_derives_goals_and_starts_empty() {
        let profile = sample();
        assert_eq!(profile.water_goal_ml, 2600);
        assert_eq!(profile.calorie_goal_kcal, 1812);
        assert_eq!(profile.logged_water_ml, 0);
        assert_eq!(profile.logged_calories_kcal, 0.0);
        assert_eq!(profile.burned_calories_kcal, 0.0);
    }

    #[test]
    fn remaining_water_never_goes_negative() {
        let mut profile = sample();
        assert_eq!(profile.log_water(600), 2000);
        assert_eq!(profile.log_water(5000), 0);
        assert_eq!(profile.logged_water_ml, 5600);
        assert_eq!(profile.remaining_water_ml(), 0);
    }

    #[test]
    fn calories_accumulate() {
        let mut profile = sample();
        profile.log_calories(52.5);
        profile.log_calories(100.0);
        assert!((profile.logged_calories_kcal - 152.5).abs() < f64::EPSILON);
    }
}

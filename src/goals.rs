//! Daily water and calorie targets derived from the user's profile.

/// Temperature used when the city's weather cannot be resolved.
pub const DEFAULT_AMBIENT_TEMP_C: f64 = 20.0;

const WATER_ML_PER_KG: f64 = 30.0;
const WATER_ML_PER_ACTIVITY_BLOCK: f64 = 500.0;
const ACTIVITY_BLOCK_MINUTES: u32 = 30;
const HOT_WEATHER_THRESHOLD_C: f64 = 25.0;
const HOT_WEATHER_EXTRA_ML: f64 = 500.0;

/// `weight * 30` plus 500 ml per full 30 minutes of activity, plus 500 ml above 25°C.
pub fn water_goal_ml(weight_kg: f64, activity_minutes: u32, ambient_temp_c: f64) -> u32 {
    let base = weight_kg * WATER_ML_PER_KG;
    let activity_bonus = f64::from(activity_minutes / ACTIVITY_BLOCK_MINUTES) * WATER_ML_PER_ACTIVITY_BLOCK;
    let heat_bonus = if ambient_temp_c > HOT_WEATHER_THRESHOLD_C {
        HOT_WEATHER_EXTRA_ML
    } else {
        0.0
    };
    (base + activity_bonus + heat_bonus).floor() as u32
}

/// BMR without a sex term (`10w + 6.25h - 5a`) plus an activity bonus.
///
/// Extreme inputs can give a negative result; it is returned as is.
pub fn calorie_goal_kcal(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_minutes: u32,
) -> i64 {
    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    let activity_bonus = match activity_minutes {
        m if m > 60 => 400.0,
        m if m > 30 => 200.0,
        _ => 0.0,
    };
    (bmr + activity_bonus).floor() as i64
}

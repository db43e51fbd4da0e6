/// Product found by the nutrition lookup, kept only between the food-name and amount steps.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodLookupResult {
    pub name: String,
    pub calories_per_100g: f64,
}

impl FoodLookupResult {
    /// Calories for the given portion: `calories_per_100g / 100 * grams`.
    pub fn calories_for(&self, grams: u32) -> f64 {
        self.calories_per_100g / 100.0 * f64::from(grams)
    }
}

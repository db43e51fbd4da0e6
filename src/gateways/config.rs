use serde::Deserialize;
use serde_json::Value;

use crate::models::FoodLookupResult;

pub const OPENWEATHER_BASE_URL: &str = "http://api.openweathermap.org";
pub const OPENFOODFACTS_BASE_URL: &str = "https://world.openfoodfacts.org";

const UNKNOWN_PRODUCT: &str = "Unknown";

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherResponse {
    pub main: WeatherMain,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FoodSearchResponse {
    #[serde(default)]
    pub products: Vec<FoodProduct>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FoodProduct {
    pub product_name: Option<String>,
    #[serde(default)]
    pub nutriments: Nutriments,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Nutriments {
    // OpenFoodFacts sends this as a number or as a numeric string depending on the product
    #[serde(rename = "energy-kcal_100g")]
    pub energy_kcal_100g: Option<Value>,
}

/// Why a food payload could not be turned into a lookup result.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("calorie value is not numeric: {0}")]
    NotNumeric(String),
    #[error("calorie value out of range: {0}")]
    OutOfRange(f64),
}

impl FoodSearchResponse {
    /// First product of the search, or `Ok(None)` when nothing matched.
    pub fn into_first_result(self) -> Result<Option<FoodLookupResult>, PayloadError> {
        let Some(product) = self.products.into_iter().next() else {
            return Ok(None);
        };

        let name = product
            .product_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        let calories_per_100g = match product.nutriments.energy_kcal_100g {
            None | Some(Value::Null) => 0.0,
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| PayloadError::NotNumeric(n.to_string()))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| PayloadError::NotNumeric(s.clone()))?,
            Some(other) => return Err(PayloadError::NotNumeric(other.to_string())),
        };

        if !calories_per_100g.is_finite() || calories_per_100g < 0.0 {
            return Err(PayloadError::OutOfRange(calories_per_100g));
        }

        Ok(Some(FoodLookupResult { name, calories_per_100g }))
    }
}

//! In-memory gateways for exercising the conversation without network access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ClimateGateway, Gateways, NutritionGateway};
use crate::models::FoodLookupResult;

/// Climate gateway answering from a fixed table; unknown cities resolve to `None`.
#[derive(Default)]
pub struct MockClimate {
    temperatures: HashMap<String, f64>,
    pub requests: Mutex<Vec<String>>,
}

impl MockClimate {
    pub fn with_city(mut self, city: &str, temp: f64) -> Self {
        self.temperatures.insert(city.to_string(), temp);
        self
    }

    pub fn recorded_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClimateGateway for MockClimate {
    async fn current_temperature(&self, city: &str) -> Option<f64> {
        self.requests.lock().unwrap().push(city.to_string());
        self.temperatures.get(city).copied()
    }
}

/// Nutrition gateway answering from a fixed table keyed by lowercase query.
#[derive(Default)]
pub struct MockNutrition {
    foods: HashMap<String, FoodLookupResult>,
    pub requests: Mutex<Vec<String>>,
}

impl MockNutrition {
    pub fn with_food(mut self, query: &str, name: &str, calories_per_100g: f64) -> Self {
        self.foods.insert(
            query.to_lowercase(),
            FoodLookupResult {
                name: name.to_string(),
                calories_per_100g,
            },
        );
        self
    }

    pub fn recorded_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NutritionGateway for MockNutrition {
    async fn lookup(&self, query: &str) -> Option<FoodLookupResult> {
        self.requests.lock().unwrap().push(query.to_string());
        self.foods.get(&query.to_lowercase()).cloned()
    }
}

pub fn gateways(climate: MockClimate, nutrition: MockNutrition) -> (Gateways, Arc<MockClimate>, Arc<MockNutrition>) {
    let climate = Arc::new(climate);
    let nutrition = Arc::new(nutrition);
    (
        Gateways::new(climate.clone(), nutrition.clone()),
        climate,
        nutrition,
    )
}

//! Remote lookups the conversation depends on.
//!
//! Both gateways swallow every failure (transport, status, payload) and report it as
//! absence, so callers only ever decide between a value and a fallback.

pub mod config;
pub mod food_facts;
pub mod weather;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::FoodLookupResult;

pub use food_facts::OpenFoodFactsClient;
pub use weather::OpenWeatherClient;

/// Current ambient temperature for a city.
#[async_trait]
pub trait ClimateGateway: Send + Sync {
    /// Temperature in °C, or `None` when the city cannot be resolved.
    async fn current_temperature(&self, city: &str) -> Option<f64>;
}

/// Calorie density lookup for a food by free-text name.
#[async_trait]
pub trait NutritionGateway: Send + Sync {
    async fn lookup(&self, query: &str) -> Option<FoodLookupResult>;
}

/// Gateway handles shared with every handler through the dispatcher.
#[derive(Clone)]
pub struct Gateways {
    pub climate: Arc<dyn ClimateGateway>,
    pub nutrition: Arc<dyn NutritionGateway>,
}

impl Gateways {
    pub fn new(climate: Arc<dyn ClimateGateway>, nutrition: Arc<dyn NutritionGateway>) -> Self {
        Self { climate, nutrition }
    }
}

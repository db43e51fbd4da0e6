use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::config::{FoodSearchResponse, OPENFOODFACTS_BASE_URL};
use super::NutritionGateway;
use crate::models::FoodLookupResult;

/// OpenFoodFacts product search client.
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenFoodFactsClient {
    pub fn new() -> Self {
        Self::with_base_url(OPENFOODFACTS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/cgi/search.pl", self.base_url)
    }

    async fn search(&self, query: &str) -> Result<Option<FoodLookupResult>> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("action", "process"), ("search_terms", query), ("json", "true")])
            .header("Accept", "application/json")
            .send()
            .await
            .context("food search request failed")?
            .error_for_status()
            .context("food search returned an error status")?;

        let text = response.text().await?;
        let search = serde_json::from_str::<FoodSearchResponse>(&text)
            .context("unexpected food search payload")?;

        Ok(search.into_first_result()?)
    }
}

#[async_trait]
impl NutritionGateway for OpenFoodFactsClient {
    async fn lookup(&self, query: &str) -> Option<FoodLookupResult> {
        match self.search(query).await {
            Ok(Some(food)) => {
                log::debug!("🍎 '{}' matched {} ({} kcal/100g)", query, food.name, food.calories_per_100g);
                Some(food)
            }
            Ok(None) => {
                log::warn!("No food found for '{}'", query);
                None
            }
            Err(e) => {
                log::error!("Error fetching food info for {}: {:#}", query, e);
                None
            }
        }
    }
}

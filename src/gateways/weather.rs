use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::config::{WeatherResponse, OPENWEATHER_BASE_URL};
use super::ClimateGateway;

/// OpenWeatherMap current-weather client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENWEATHER_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }

    async fn fetch_temperature(&self, city: &str) -> Result<f64> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .header("Accept", "application/json")
            .send()
            .await
            .context("weather request failed")?
            .error_for_status()
            .context("weather service returned an error status")?;

        let text = response.text().await?;
        let weather = serde_json::from_str::<WeatherResponse>(&text)
            .context("unexpected weather payload")?;

        anyhow::ensure!(weather.main.temp.is_finite(), "temperature is not finite");
        Ok(weather.main.temp)
    }
}

#[async_trait]
impl ClimateGateway for OpenWeatherClient {
    async fn current_temperature(&self, city: &str) -> Option<f64> {
        match self.fetch_temperature(city).await {
            Ok(temp) => {
                log::debug!("🌡️ {} is {:.1}°C", city, temp);
                Some(temp)
            }
            Err(e) => {
                log::error!("Error fetching weather for {}: {:#}", city, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_answering(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "New York"))
            .and(query_param("appid", "KEY"))
            .and(query_param("units", "metric"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = OpenWeatherClient::with_base_url("http://localhost:9000/", "key");
        assert_eq!(client.endpoint(), "http://localhost:9000/data/2.5/weather");
    }

    #[tokio::test]
    async fn unreachable_service_reports_absence() {
        // port 9 (discard) is closed on test machines, so the connect fails fast
        let client = OpenWeatherClient::with_base_url("http://127.0.0.1:9", "key");
        assert_eq!(client.current_temperature("London").await, None);
    }

    #[tokio::test]
    async fn reads_temperature_from_metric_query() {
        let server = server_answering(
            ResponseTemplate::new(200).set_body_json(json!({"main": {"temp": 12.5}, "name": "New York"})),
        )
        .await;
        let client = OpenWeatherClient::with_base_url(server.uri(), "KEY");

        assert_eq!(client.current_temperature("New York").await, Some(12.5));
    }

    #[tokio::test]
    async fn error_statuses_report_absence() {
        for status in [404u16, 500] {
            let server = server_answering(
                ResponseTemplate::new(status).set_body_json(json!({"cod": status, "message": "nope"})),
            )
            .await;
            let client = OpenWeatherClient::with_base_url(server.uri(), "KEY");

            assert_eq!(client.current_temperature("New York").await, None, "status {status}");
        }
    }

    #[tokio::test]
    async fn non_json_body_reports_absence() {
        let server = server_answering(
            ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        )
        .await;
        let client = OpenWeatherClient::with_base_url(server.uri(), "KEY");

        assert_eq!(client.current_temperature("New York").await, None);
    }
}

use std::env;

use anyhow::{Context, Result};

const BOT_TOKEN_ENV: &str = "TELOXIDE_TOKEN";
const WEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Credentials supplied at process start. There is no other configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub weather_api_key: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &"***")
            .field("weather_api_key", &"***")
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} must be set", key))
        };

        Ok(Self {
            bot_token: required(BOT_TOKEN_ENV)?,
            weather_api_key: required(WEATHER_API_KEY_ENV)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_both_credentials() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "123:abc"),
            ("OPENWEATHER_API_KEY", " key \n"),
        ]))
        .unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.weather_api_key, "key");
    }

    #[test]
    fn missing_or_blank_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[("TELOXIDE_TOKEN", "123:abc")])).unwrap_err();
        assert!(err.to_string().contains("OPENWEATHER_API_KEY"));

        let err = AppConfig::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "  "),
            ("OPENWEATHER_API_KEY", "key"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("TELOXIDE_TOKEN"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = AppConfig {
            bot_token: "secret-token".to_string(),
            weather_api_key: "secret-key".to_string(),
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }
}

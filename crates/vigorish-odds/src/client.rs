//! Odds API client implementation.

use crate::{
    Result,
    error::OddsError,
    types::{OddsEvent, SportInfo},
};
use reqwest::Client;
use std::env;
use vigorish_traits::Sport;

/// Base URL for The Odds API v4.
const ODDS_BASE_URL: &str = "https://api.the-odds-api.com/v4";

/// The Odds API client.
#[derive(Debug, Clone)]
pub struct OddsClient {
    client: Client,
    api_key: String,
}

impl OddsClient {
    /// Create a new odds client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new odds client from the `ODDS_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("ODDS_API_KEY").map_err(|_| OddsError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{ODDS_BASE_URL}/{endpoint}&apiKey={}", self.api_key)
        } else {
            format!("{ODDS_BASE_URL}/{endpoint}?apiKey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OddsError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(OddsError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // The feed reports errors as a JSON object with a message field
        if text.contains("\"message\"") && text.contains("\"error_code\"") {
            return Err(OddsError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            OddsError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// List the sports the feed currently carries.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn sports(&self) -> Result<Vec<SportInfo>> {
        self.get("sports").await
    }

    /// Fetch the current odds board for a sport.
    ///
    /// # Arguments
    ///
    /// * `sport` - Sport whose board to fetch
    /// * `markets` - Comma-separated market keys, e.g. `"spreads,totals"`
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn odds(&self, sport: Sport, markets: &str) -> Result<Vec<OddsEvent>> {
        let endpoint = format!(
            "sports/{}/odds?regions=us&oddsFormat=american&markets={markets}",
            sport.odds_api_key()
        );
        self.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = OddsClient::new("test_key");
        assert_eq!(
            client.url("sports"),
            "https://api.the-odds-api.com/v4/sports?apiKey=test_key"
        );
        assert_eq!(
            client.url("sports/basketball_nba/odds?regions=us&markets=spreads"),
            "https://api.the-odds-api.com/v4/sports/basketball_nba/odds?regions=us&markets=spreads&apiKey=test_key"
        );
    }

    #[test]
    fn test_sport_keys_feed_endpoint() {
        assert_eq!(Sport::Nhl.odds_api_key(), "icehockey_nhl");
        assert_eq!(Sport::Ncaab.odds_api_key(), "basketball_ncaab");
    }
}

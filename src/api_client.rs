use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;

use crate::client::Client;
use crate::config::FetchConfig;
use crate::error::Error;

const MATCHES_URL: &str = "$BASE_URL/api/v2/matches?competition=$COMPETITION&season=$SEASON&matchweek=$MATCHWEEK&_limit=$LIMIT";

// the API rejects requests that don't look like they come from a browser
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct MatchesApiClient {
    client: reqwest::Client,
    config: FetchConfig,
}

impl MatchesApiClient {
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(config.timeout)
                .build()?,
            config,
        })
    }

    pub fn matches_url(&self, matchweek: u32) -> String {
        MATCHES_URL
            .replace("$BASE_URL", self.config.base_url.trim_end_matches('/'))
            .replace("$COMPETITION", &self.config.competition.to_string())
            .replace("$SEASON", &self.config.season.to_string())
            .replace("$MATCHWEEK", &matchweek.to_string())
            .replace("$LIMIT", &self.config.limit.to_string())
    }
}

#[async_trait]
impl Client for MatchesApiClient {
    async fn fetch_matches(&self, matchweek: u32) -> Result<Value, Error> {
        let body = self
            .client
            .get(self.matches_url(matchweek))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { matchweek, source })
    }
}

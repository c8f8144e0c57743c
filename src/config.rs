use std::time::Duration;

pub const COMPETITION_ID: u32 = 8; // Premier League
pub const SEASON_YEAR: u32 = 2024; // 2024/25
pub const MAX_MATCHWEEKS: u32 = 38;
pub const API_LIMIT: u32 = 100;
pub const DEFAULT_MATCHWEEK: u32 = 15;

pub const API_BASE_URL: &str = "https://sdp-prem-prod.premier-league-prod.pulselive.com";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a request against the matches endpoint needs except the
/// matchweek itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub competition: u32,
    pub season: u32,
    pub limit: u32,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.into(),
            competition: COMPETITION_ID,
            season: SEASON_YEAR,
            limit: API_LIMIT,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl FetchConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

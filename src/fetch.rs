use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::Client;
use crate::config::{FetchConfig, MAX_MATCHWEEKS};
use crate::error::{error_chain, Error};
use crate::types::{MatchweekEntry, SeasonMatches};

/// Fetches one matchweek, logging any failure and turning it into `None`.
pub async fn fetch_matchweek<C>(client: &C, matchweek: u32) -> Option<Value>
where
    C: Client + ?Sized,
{
    match client.fetch_matches(matchweek).await {
        Ok(data) => Some(data),
        Err(e) => {
            error!("{}", failure_message(matchweek, &e));
            None
        }
    }
}

fn failure_message(matchweek: u32, err: &Error) -> String {
    match err {
        Error::Decode { source, .. } => {
            format!("Error parsing JSON for matchweek {matchweek}: {source}")
        }
        e => format!("Error fetching matchweek {matchweek}: {}", error_chain(e)),
    }
}

/// Fetches matchweeks 1 through 38 one after another. Failed matchweeks are
/// left out of the result.
pub async fn fetch_season<C>(client: &C, config: &FetchConfig) -> SeasonMatches
where
    C: Client + ?Sized,
{
    info!("Fetching all matchweeks (1-{MAX_MATCHWEEKS})...");
    let mut matchweeks = Vec::with_capacity(MAX_MATCHWEEKS as usize);

    for week in 1..=MAX_MATCHWEEKS {
        info!("Fetching matchweek {week}...");
        match fetch_matchweek(client, week).await {
            Some(data) => matchweeks.push(MatchweekEntry {
                matchweek: week,
                data,
            }),
            None => warn!("Failed to fetch matchweek {week}"),
        }
    }

    SeasonMatches {
        season: config.season,
        competition: config.competition,
        matchweeks,
    }
}

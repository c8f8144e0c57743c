use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use tracing::info;

use crate::client::Client;
use crate::config::MAX_MATCHWEEKS;
use crate::error::Error;
use crate::fetch::fetch_matchweek;
use crate::types::{MatchRecord, MatchweekEntry, SeasonMatches};

pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// upcoming matchweeks pulled along with a stale one, so new fixtures show up
const LOOKAHEAD: u32 = 2;

fn kicked_off_unfinished(record: &MatchRecord, now: NaiveDateTime) -> bool {
    let Some(kickoff) = record
        .kickoff
        .as_deref()
        .and_then(|k| NaiveDateTime::parse_from_str(k, KICKOFF_FORMAT).ok())
    else {
        return false;
    };
    kickoff <= now && !record.is_full_time()
}

/// Matchweeks that need fetching again: any matchweek with a match that has
/// kicked off but isn't full time yet, plus the two after it.
pub fn stale_matchweeks(season: &SeasonMatches, now: NaiveDateTime) -> Vec<u32> {
    let mut weeks = BTreeSet::new();

    for entry in &season.matchweeks {
        if entry
            .match_records()
            .iter()
            .any(|record| kicked_off_unfinished(record, now))
        {
            weeks.insert(entry.matchweek);
            for ahead in 1..=LOOKAHEAD {
                let week = entry.matchweek.saturating_add(ahead);
                if week <= MAX_MATCHWEEKS {
                    weeks.insert(week);
                }
            }
        }
    }

    weeks.into_iter().collect()
}

/// Fetches every listed matchweek in order. Unlike `--all`, a single failure
/// aborts the whole refresh.
pub async fn fetch_matchweeks<C>(client: &C, weeks: &[u32]) -> Result<Vec<MatchweekEntry>, Error>
where
    C: Client + ?Sized,
{
    let mut fetched = Vec::with_capacity(weeks.len());
    for &week in weeks {
        info!("Fetching matchweek {week}...");
        let data = fetch_matchweek(client, week)
            .await
            .ok_or(Error::NoData { matchweek: week })?;
        fetched.push(MatchweekEntry {
            matchweek: week,
            data,
        });
    }
    Ok(fetched)
}

/// Replaces entries with freshly fetched ones by matchweek number and keeps
/// the result sorted.
pub fn merge(season: &mut SeasonMatches, fetched: Vec<MatchweekEntry>) {
    let mut by_week: BTreeMap<u32, MatchweekEntry> = season
        .matchweeks
        .drain(..)
        .map(|entry| (entry.matchweek, entry))
        .collect();
    for entry in fetched {
        by_week.insert(entry.matchweek, entry);
    }
    season.matchweeks = by_week.into_values().collect();
}

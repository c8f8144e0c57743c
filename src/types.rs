use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope written by `--all`: every matchweek that fetched successfully.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonMatches {
    pub season: u32,
    pub competition: u32,
    pub matchweeks: Vec<MatchweekEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchweekEntry {
    pub matchweek: u32,
    pub data: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TeamScore {
    pub name: Option<String>,
    pub score: Option<i64>,
}

/// The handful of fields read out of a match record. Everything else in the
/// payload is left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub kickoff: Option<String>,
    pub period: Option<String>,
    pub home_team: Option<TeamScore>,
    pub away_team: Option<TeamScore>,
}

impl MatchRecord {
    pub fn is_full_time(&self) -> bool {
        self.period.as_deref() == Some("FullTime")
    }
}

impl MatchweekEntry {
    /// Match records under the payload's `data` array. Records that don't
    /// have the expected shape are skipped.
    pub fn match_records(&self) -> Vec<MatchRecord> {
        self.data
            .get("data")
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|record| MatchRecord::deserialize(record).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

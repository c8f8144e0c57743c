use std::collections::HashMap;

use serde::Serialize;

use crate::types::{MatchRecord, SeasonMatches};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub points: u32,
    pub gf: i64,
    pub ga: i64,
    pub gd: i64,
}

impl Standing {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            points: 0,
            gf: 0,
            ga: 0,
            gd: 0,
        }
    }

    fn record(&mut self, scored: i64, conceded: i64) {
        self.gf += scored;
        self.ga += conceded;
        self.gd += scored - conceded;
        self.points += match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => 3,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Less => 0,
        };
    }
}

/// Finished result of a match: home name and score, away name and score.
fn final_score(record: &MatchRecord) -> Option<(&str, i64, &str, i64)> {
    if !record.is_full_time() {
        return None;
    }
    let home = record.home_team.as_ref()?;
    let away = record.away_team.as_ref()?;
    Some((
        home.name.as_deref()?,
        home.score?,
        away.name.as_deref()?,
        away.score?,
    ))
}

fn team_index(
    standings: &mut Vec<Standing>,
    index: &mut HashMap<String, usize>,
    name: &str,
) -> usize {
    if let Some(&i) = index.get(name) {
        return i;
    }
    standings.push(Standing::new(name));
    index.insert(name.to_string(), standings.len() - 1);
    standings.len() - 1
}

pub struct LeagueTable(Vec<Standing>);

impl LeagueTable {
    pub fn new(season: &SeasonMatches) -> Self {
        let mut standings: Vec<Standing> = Vec::with_capacity(20);
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in &season.matchweeks {
            for record in entry.match_records() {
                let Some((home, home_score, away, away_score)) = final_score(&record) else {
                    continue;
                };
                let h = team_index(&mut standings, &mut index, home);
                standings[h].record(home_score, away_score);
                let a = team_index(&mut standings, &mut index, away);
                standings[a].record(away_score, home_score);
            }
        }

        Self(standings)
    }

    /// Points, then goal difference, then goals scored. Teams level on all
    /// three keep the order they first appeared in.
    pub fn standings(mut self) -> Vec<Standing> {
        self.0.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.gd.cmp(&a.gd))
                .then(b.gf.cmp(&a.gf))
        });
        self.0
    }
}

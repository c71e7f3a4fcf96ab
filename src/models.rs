use serde_json::Value;

use crate::lookup::{get_id, get_or_default_i64, get_or_default_str, get_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub fixture_id: u32,
    pub home: TeamRef,
    pub away: TeamRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub kind: String,
    /// `None` when the provider has no value yet (rendered as `N/A`).
    pub value: Option<String>,
}

/// One team's box-score statistics for a single fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTeamStats {
    pub team_name: String,
    pub statistics: Vec<StatLine>,
}

/// The season aggregates the scoring engine reads. Everything defaults to
/// zero or empty, so a sparse record still scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSeasonStats {
    pub form: String,
    pub wins: i64,
    pub draws: i64,
    pub loses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
}

impl TeamSeasonStats {
    pub fn from_value(v: &Value) -> Self {
        Self {
            form: get_or_default_str(v, &["form"], "").to_string(),
            wins: get_or_default_i64(v, &["fixtures", "wins", "total"], 0),
            draws: get_or_default_i64(v, &["fixtures", "draws", "total"], 0),
            loses: get_or_default_i64(v, &["fixtures", "loses", "total"], 0),
            goals_for: get_or_default_i64(v, &["goals", "for", "total", "total"], 0),
            goals_against: get_or_default_i64(v, &["goals", "against", "total", "total"], 0),
        }
    }
}

pub fn parse_leagues(response: &Value) -> Vec<League> {
    let Some(items) = response.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            Some(League {
                id: get_id(item, &["league", "id"])?,
                name: get_or_default_str(item, &["league", "name"], "").to_string(),
                country: get_or_default_str(item, &["country", "name"], "").to_string(),
            })
        })
        .collect()
}

pub fn parse_fixtures(response: &Value) -> Vec<Fixture> {
    let Some(items) = response.as_array() else {
        return Vec::new();
    };
    items.iter().filter_map(parse_fixture).collect()
}

fn parse_fixture(item: &Value) -> Option<Fixture> {
    let fixture_id = get_id(item, &["fixture", "id"])?;
    let home = parse_team_ref(item, "home")?;
    let away = parse_team_ref(item, "away")?;
    Some(Fixture {
        fixture_id,
        home,
        away,
    })
}

fn parse_team_ref(item: &Value, side: &str) -> Option<TeamRef> {
    Some(TeamRef {
        id: get_id(item, &["teams", side, "id"])?,
        name: get_or_default_str(item, &["teams", side, "name"], "").to_string(),
    })
}

pub fn parse_fixture_statistics(response: &Value) -> Vec<FixtureTeamStats> {
    let Some(items) = response.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let statistics = get_path(item, &["statistics"])
                .and_then(|v| v.as_array())
                .map(|rows| rows.iter().map(parse_stat_line).collect())
                .unwrap_or_default();
            FixtureTeamStats {
                team_name: get_or_default_str(item, &["team", "name"], "").to_string(),
                statistics,
            }
        })
        .collect()
}

fn parse_stat_line(row: &Value) -> StatLine {
    let value = match get_path(row, &["value"]) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    StatLine {
        kind: get_or_default_str(row, &["type"], "").to_string(),
        value,
    }
}

/// `None` when the provider returned no record for the team (an absent,
/// empty, or non-object `response`).
pub fn parse_team_statistics(response: &Value) -> Option<TeamSeasonStats> {
    let obj = response.as_object()?;
    if obj.is_empty() {
        return None;
    }
    Some(TeamSeasonStats::from_value(response))
}

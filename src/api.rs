use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::errors::FetchError;
use crate::models::{
    Fixture, FixtureTeamStats, League, TeamSeasonStats, parse_fixture_statistics, parse_fixtures,
    parse_leagues, parse_team_statistics,
};

/// The four read endpoints the predictor needs. Implementations never fail:
/// anything that goes wrong comes back as an empty result.
pub trait FootballApi {
    fn leagues(&self) -> Vec<League>;
    fn fixtures(&self, league_id: u32, season: i32, date: NaiveDate) -> Vec<Fixture>;
    fn fixture_statistics(&self, fixture_id: u32) -> Vec<FixtureTeamStats>;
    fn team_statistics(&self, team_id: u32, league_id: u32, season: i32)
    -> Option<TeamSeasonStats>;
}

pub struct ApiFootballClient {
    client: Client,
    config: ApiConfig,
}

impl ApiFootballClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self { client, config })
    }

    fn get_response(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        log::debug!("GET {url} {params:?}");

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, concat!("matchday_predictor/", env!("CARGO_PKG_VERSION")))
            .header("x-rapidapi-host", &self.config.host)
            .header("x-rapidapi-key", &self.config.api_key)
            .query(params)
            .send()
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(|source| FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        decode_response(endpoint, &body)
    }

    /// Failed reads are logged and replaced with `Value::Null`, which every
    /// parser treats as "nothing".
    fn response_or_null(&self, endpoint: &str, params: &[(&str, String)]) -> Value {
        match self.get_response(endpoint, params) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("{err}");
                Value::Null
            }
        }
    }
}

impl FootballApi for ApiFootballClient {
    fn leagues(&self) -> Vec<League> {
        parse_leagues(&self.response_or_null("leagues", &[]))
    }

    fn fixtures(&self, league_id: u32, season: i32, date: NaiveDate) -> Vec<Fixture> {
        let params = [
            ("league", league_id.to_string()),
            ("season", season.to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
        ];
        parse_fixtures(&self.response_or_null("fixtures", &params))
    }

    fn fixture_statistics(&self, fixture_id: u32) -> Vec<FixtureTeamStats> {
        let params = [("fixture", fixture_id.to_string())];
        parse_fixture_statistics(&self.response_or_null("fixtures/statistics", &params))
    }

    fn team_statistics(
        &self,
        team_id: u32,
        league_id: u32,
        season: i32,
    ) -> Option<TeamSeasonStats> {
        let params = [
            ("team", team_id.to_string()),
            ("league", league_id.to_string()),
            ("season", season.to_string()),
        ];
        parse_team_statistics(&self.response_or_null("teams/statistics", &params))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Value,
}

/// Pulls the `response` field out of an API body. A blank or `null` body, or
/// an envelope without `response`, decodes to `Value::Null`.
pub fn decode_response(endpoint: &str, raw: &str) -> Result<Value, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Value::Null);
    }
    let envelope: Envelope =
        serde_json::from_str(trimmed).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;
    Ok(envelope.response)
}

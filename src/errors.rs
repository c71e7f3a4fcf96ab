use chrono::NaiveDate;
use thiserror::Error;

/// Startup configuration problems. These are the only errors that end the
/// process with a failure status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set; add it to the environment or to a .env file")]
    MissingApiKey(&'static str),
}

/// Rejected console input. The orchestrator shows the message and asks again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidFormat,
    #[error("The date cannot be in the future.")]
    FutureDate,
    #[error("The date is too old. Please enter a date from 2014-01-01 onwards.")]
    TooOld,
    #[error("Invalid League ID. Please enter a numeric value.")]
    NotANumber,
    #[error("Invalid League ID. Please enter a positive number.")]
    NonPositive,
}

/// A failed API read. Never surfaces past the client: it is logged and the
/// call yields an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned http {status}")]
    Status { endpoint: String, status: u16 },
    #[error("invalid json from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Data the run needed but the API did not have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("No leagues available.")]
    NoLeagues,
    #[error("League ID not found.")]
    UnknownLeague(u32),
    #[error("No matches found for {date} in the selected league.")]
    NoMatches { date: NaiveDate, league_id: u32 },
    #[error("Team statistics not available for prediction.")]
    TeamStats { fixture_id: u32 },
}

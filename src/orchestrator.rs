//! The interactive run: date → league → matches → predictions.
//!
//! Stages advance strictly forward. Missing data ends the run (or, for team
//! statistics, just that match's prediction) with a message; only console
//! I/O failures come back as errors.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};

use crate::api::FootballApi;
use crate::errors::{NotFound, ValidationError};
use crate::models::Fixture;
use crate::predict::{Prediction, predict_from_stats};
use crate::render;
use crate::validate::{validate_date, validate_league_id};

pub const DATE_PROMPT: &str =
    "Enter the date (YYYY-MM-DD) to get matches (leave blank for today): ";
pub const LEAGUE_PROMPT: &str =
    "\nEnter the League ID you want to get matches for (e.g., 3 for Europa League): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitDate,
    ListLeagues,
    AwaitLeague,
    FetchMatches,
    FetchStats,
    FetchForms,
    ScoreAndPredict,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitDate => "AWAIT_DATE",
            Stage::ListLeagues => "LIST_LEAGUES",
            Stage::AwaitLeague => "AWAIT_LEAGUE",
            Stage::FetchMatches => "FETCH_MATCHES",
            Stage::FetchStats => "FETCH_STATS",
            Stage::FetchForms => "FETCH_FORMS",
            Stage::ScoreAndPredict => "SCORE_AND_PREDICT",
            Stage::Done => "DONE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub fixture: Fixture,
    /// `None` when either side had no season statistics.
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { matches: Vec<MatchReport> },
    Stopped(NotFound),
}

/// Season the provider files a date under: its calendar year.
pub fn season_for(date: NaiveDate) -> i32 {
    date.year()
}

pub fn run<A, R, W>(api: &A, input: &mut R, out: &mut W, today: NaiveDate) -> Result<RunOutcome>
where
    A: FootballApi + ?Sized,
    R: BufRead,
    W: Write,
{
    enter(Stage::AwaitDate);
    let date = ask_until_valid(input, out, DATE_PROMPT, |raw| {
        if raw.trim().is_empty() {
            Ok(today)
        } else {
            validate_date(raw, today)
        }
    })?;
    let season = season_for(date);

    enter(Stage::ListLeagues);
    let leagues = api.leagues();
    if leagues.is_empty() {
        return stop(out, NotFound::NoLeagues);
    }
    render::write_league_catalog(out, &leagues).context("write league catalog")?;

    enter(Stage::AwaitLeague);
    let league_id = ask_until_valid(input, out, LEAGUE_PROMPT, validate_league_id)?;
    if !leagues.iter().any(|l| l.id == league_id) {
        return stop(out, NotFound::UnknownLeague(league_id));
    }

    enter(Stage::FetchMatches);
    let fixtures = api.fixtures(league_id, season, date);
    if fixtures.is_empty() {
        return stop(out, NotFound::NoMatches { date, league_id });
    }
    log::debug!(
        "{} fixture(s) for league {league_id} on {date} (season {season})",
        fixtures.len()
    );

    let mut matches = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let prediction = process_match(api, out, &fixture, league_id, season)?;
        matches.push(MatchReport {
            fixture,
            prediction,
        });
    }

    enter(Stage::Done);
    Ok(RunOutcome::Completed { matches })
}

fn process_match<A, W>(
    api: &A,
    out: &mut W,
    fixture: &Fixture,
    league_id: u32,
    season: i32,
) -> Result<Option<Prediction>>
where
    A: FootballApi + ?Sized,
    W: Write,
{
    render::write_match_header(out, fixture).context("write match header")?;

    enter(Stage::FetchStats);
    let stats = api.fixture_statistics(fixture.fixture_id);
    render::write_fixture_statistics(out, &stats).context("write match statistics")?;

    enter(Stage::FetchForms);
    let home = api.team_statistics(fixture.home.id, league_id, season);
    let away = api.team_statistics(fixture.away.id, league_id, season);
    let (Some(home), Some(away)) = (home, away) else {
        let missing = NotFound::TeamStats {
            fixture_id: fixture.fixture_id,
        };
        log::info!("fixture {}: {missing}", fixture.fixture_id);
        writeln!(out, "{missing}").context("write prediction")?;
        return Ok(None);
    };

    enter(Stage::ScoreAndPredict);
    let prediction = predict_from_stats(&home, &away);
    render::write_prediction(out, &prediction).context("write prediction")?;
    Ok(Some(prediction))
}

fn enter(stage: Stage) {
    log::debug!("stage -> {stage}");
}

fn stop<W: Write>(out: &mut W, reason: NotFound) -> Result<RunOutcome> {
    log::info!("run stopped: {reason:?}");
    writeln!(out, "{reason}").context("write message")?;
    Ok(RunOutcome::Stopped(reason))
}

/// Prompts until `parse` accepts the answer. Each rejection prints the
/// validation message before asking again.
fn ask_until_valid<T, R, W, F>(input: &mut R, out: &mut W, prompt: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        write!(out, "{prompt}").context("write prompt")?;
        out.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read answer")?;
        if read == 0 {
            bail!("input closed while waiting for an answer");
        }
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("rejected input {:?}: {err:?}", line.trim());
                writeln!(out, "{err}").context("write validation message")?;
            }
        }
    }
}

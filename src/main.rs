use std::io;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;

use matchday_predictor::api::ApiFootballClient;
use matchday_predictor::config::ApiConfig;
use matchday_predictor::orchestrator::{self, RunOutcome};

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err:#}");
    }
    ExitCode::SUCCESS
}

fn run(config: ApiConfig) -> Result<()> {
    let client = ApiFootballClient::new(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let today = Local::now().date_naive();

    match orchestrator::run(&client, &mut input, &mut out, today)? {
        RunOutcome::Completed { matches } => {
            let predicted = matches.iter().filter(|m| m.prediction.is_some()).count();
            log::info!("{predicted}/{} match(es) predicted", matches.len());
        }
        RunOutcome::Stopped(reason) => log::info!("stopped early: {reason}"),
    }
    Ok(())
}

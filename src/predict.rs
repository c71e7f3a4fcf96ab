use std::fmt;

use crate::models::TeamSeasonStats;
use crate::score::{Score, compute_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub outcome: Outcome,
    pub home_score: Score,
    pub away_score: Score,
}

pub fn predict(home_score: Score, away_score: Score) -> Prediction {
    let outcome = if home_score > away_score {
        Outcome::HomeWin
    } else if away_score > home_score {
        Outcome::AwayWin
    } else {
        Outcome::Draw
    };
    Prediction {
        outcome,
        home_score,
        away_score,
    }
}

pub fn predict_from_stats(home: &TeamSeasonStats, away: &TeamSeasonStats) -> Prediction {
    predict(compute_score(home), compute_score(away))
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (home, away) = (self.home_score, self.away_score);
        match self.outcome {
            Outcome::HomeWin => write!(f, "Home team is more likely to win ({home} vs {away})"),
            // The winner's score leads.
            Outcome::AwayWin => write!(f, "Away team is more likely to win ({away} vs {home})"),
            Outcome::Draw => write!(f, "The match is likely to be a draw ({home} vs {away})"),
        }
    }
}

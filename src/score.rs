//! Heuristic team strength score.
//!
//! score = form points + (3·wins + draws − loses) + 0.5·(goals for − goals against)
//!
//! Every weight is a whole or half point, so the score is held as an integer
//! count of half points. Comparisons between scores are then exact.

use std::fmt;

use crate::models::TeamSeasonStats;

pub const FORM_WIN: i64 = 3;
pub const FORM_DRAW: i64 = 1;
pub const FORM_LOSS: i64 = -1;

pub const WIN_WEIGHT: i64 = 3;
pub const DRAW_WEIGHT: i64 = 1;
pub const LOSS_WEIGHT: i64 = -1;

// Goal weights are ±0.5, expressed in half points.
const GOALS_FOR_HALVES: i64 = 1;
const GOALS_AGAINST_HALVES: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score {
    halves: i64,
}

impl Score {
    pub const ZERO: Score = Score { halves: 0 };

    pub fn from_halves(halves: i64) -> Self {
        Self { halves }
    }

    pub fn from_points(points: i64) -> Self {
        Self {
            halves: points.saturating_mul(2),
        }
    }

    pub fn halves(self) -> i64 {
        self.halves
    }

    pub fn as_f64(self) -> f64 {
        self.halves as f64 / 2.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.halves / 2;
        match self.halves % 2 {
            0 => write!(f, "{whole}"),
            _ if self.halves < 0 && whole == 0 => write!(f, "-0.5"),
            _ => write!(f, "{whole}.5"),
        }
    }
}

/// Sum of W/D/L points over the form string; other characters are skipped.
pub fn form_points(form: &str) -> i64 {
    form.chars()
        .map(|c| match c {
            'W' => FORM_WIN,
            'D' => FORM_DRAW,
            'L' => FORM_LOSS,
            _ => 0,
        })
        .fold(0i64, i64::saturating_add)
}

pub fn record_points(stats: &TeamSeasonStats) -> i64 {
    stats
        .wins
        .saturating_mul(WIN_WEIGHT)
        .saturating_add(stats.draws.saturating_mul(DRAW_WEIGHT))
        .saturating_add(stats.loses.saturating_mul(LOSS_WEIGHT))
}

pub fn goal_halves(stats: &TeamSeasonStats) -> i64 {
    stats
        .goals_for
        .saturating_mul(GOALS_FOR_HALVES)
        .saturating_add(stats.goals_against.saturating_mul(GOALS_AGAINST_HALVES))
}

pub fn compute_score(stats: &TeamSeasonStats) -> Score {
    let points = form_points(&stats.form).saturating_add(record_points(stats));
    Score::from_halves(
        Score::from_points(points)
            .halves()
            .saturating_add(goal_halves(stats)),
    )
}

use std::io::{self, Write};

use crate::models::{Fixture, FixtureTeamStats, League};
use crate::predict::Prediction;

pub fn league_line(league: &League) -> String {
    format!("{}: {} ({})", league.id, league.name, league.country)
}

pub fn write_league_catalog<W: Write>(out: &mut W, leagues: &[League]) -> io::Result<()> {
    writeln!(out, "\nAvailable Leagues:")?;
    for league in leagues {
        writeln!(out, "{}", league_line(league))?;
    }
    Ok(())
}

pub fn write_match_header<W: Write>(out: &mut W, fixture: &Fixture) -> io::Result<()> {
    writeln!(out, "\nMatch: {} vs {}", fixture.home.name, fixture.away.name)
}

pub fn write_fixture_statistics<W: Write>(
    out: &mut W,
    stats: &[FixtureTeamStats],
) -> io::Result<()> {
    if stats.is_empty() {
        return writeln!(out, "No statistics available for this match yet.");
    }
    for team in stats {
        writeln!(out, "\nStatistics for {}:", team.team_name)?;
        for line in &team.statistics {
            writeln!(
                out,
                "  {}: {}",
                line.kind,
                line.value.as_deref().unwrap_or("N/A")
            )?;
        }
    }
    Ok(())
}

pub fn write_prediction<W: Write>(out: &mut W, prediction: &Prediction) -> io::Result<()> {
    writeln!(out, "\nPrediction: {prediction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatLine;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn catalog_lists_id_name_country() {
        let leagues = vec![League {
            id: 39,
            name: "Premier League".to_string(),
            country: "England".to_string(),
        }];
        let text = rendered(|out| write_league_catalog(out, &leagues));
        assert_eq!(text, "\nAvailable Leagues:\n39: Premier League (England)\n");
    }

    #[test]
    fn missing_stat_values_show_na() {
        let stats = vec![FixtureTeamStats {
            team_name: "Arsenal".to_string(),
            statistics: vec![
                StatLine {
                    kind: "Shots on Goal".to_string(),
                    value: Some("6".to_string()),
                },
                StatLine {
                    kind: "Red Cards".to_string(),
                    value: None,
                },
            ],
        }];
        let text = rendered(|out| write_fixture_statistics(out, &stats));
        assert_eq!(
            text,
            "\nStatistics for Arsenal:\n  Shots on Goal: 6\n  Red Cards: N/A\n"
        );
    }

    #[test]
    fn no_stats_message() {
        let text = rendered(|out| write_fixture_statistics(out, &[]));
        assert_eq!(text, "No statistics available for this match yet.\n");
    }
}

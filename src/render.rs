use std::fmt::Write as _;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::models::Tournament;
use crate::domain::{Round, StandingsRow};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn standings_table(rows: &[StandingsRow]) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "{:>4}  {:>6}  {:<24} {:>4} {:>6} {:>7}",
            "#", "id", "name", "wins", "losses", "matches"
        )
        .bold()
    );

    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>6}  {:<24} {:>4} {:>6} {:>7}",
            rank + 1,
            row.id,
            row.name,
            row.wins,
            row.losses(),
            row.matches
        );
    }

    out
}

pub fn round_table(round: &Round) -> String {
    let mut out = format!("{}\n", "Next round".bold());

    if round.pairings.is_empty() {
        out.push_str("  (no pairings)\n");
    }
    for pairing in &round.pairings {
        let (id1, id2) = pairing.ids();
        let _ = writeln!(
            out,
            "  {} ({})  vs  {} ({})",
            pairing.name1, id1, pairing.name2, id2
        );
    }
    if let Some(bye) = &round.bye {
        let _ = writeln!(out, "  {} {} ({})", "bye:".yellow(), bye.name, bye.id);
    }

    out
}

pub fn tournament_list(tournaments: &[Tournament]) -> String {
    let mut out = format!("{}\n", format!("{:>6}  {}", "id", "name").bold());
    for tournament in tournaments {
        let _ = writeln!(out, "{:>6}  {}", tournament.id, tournament.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pairing;

    fn row(id: i64, name: &str, wins: u32) -> StandingsRow {
        StandingsRow {
            id,
            name: name.to_string(),
            wins,
            matches: 2,
        }
    }

    #[test]
    fn test_round_table_lists_pairs_and_bye() {
        colored::control::set_override(false);
        let round = Round {
            pairings: vec![Pairing::between(&row(1, "Ann", 2), &row(2, "Bea", 1))],
            bye: Some(row(3, "Cid", 0)),
        };

        let text = round_table(&round);

        assert!(text.contains("Ann (1)  vs  Bea (2)"));
        assert!(text.contains("bye: Cid (3)"));
    }

    #[test]
    fn test_standings_table_shows_losses() {
        colored::control::set_override(false);
        let text = standings_table(&[row(7, "Gus", 1)]);

        assert!(text.lines().next().unwrap().contains("losses"));
        assert!(text.contains("Gus"));
        assert!(text.lines().nth(1).unwrap().ends_with("   1      1       2"));
    }

    #[test]
    fn test_standings_json_uses_field_names() {
        let json = to_json(&vec![row(5, "Eve", 1)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], 5);
        assert_eq!(value[0]["wins"], 1);
        assert_eq!(value[0]["matches"], 2);
    }
}

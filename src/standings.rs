use std::cmp::Ordering;
use std::collections::HashMap;

use crate::database::models::{Match, Player};
use crate::domain::{PlayerId, StandingsRow};

/// Ranking order shared by every store: most wins first, ties broken by lower id.
pub fn compare(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

pub fn sort_standings(rows: &mut [StandingsRow]) {
    rows.sort_by(compare);
}

pub fn is_ranked(rows: &[StandingsRow]) -> bool {
    rows.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Aggregates match records into one ranked row per player.
///
/// Matches naming players outside `players` are ignored.
pub fn tally(players: &[Player], matches: &[Match]) -> Vec<StandingsRow> {
    let (wins, played) = count_results(matches);

    let mut rows: Vec<StandingsRow> = players
        .iter()
        .map(|player| StandingsRow {
            id: player.id,
            name: player.name.clone(),
            wins: wins.get(&player.id).copied().unwrap_or(0),
            matches: played.get(&player.id).copied().unwrap_or(0),
        })
        .collect();

    sort_standings(&mut rows);
    rows
}

fn count_results(matches: &[Match]) -> (HashMap<PlayerId, u32>, HashMap<PlayerId, u32>) {
    let mut wins = HashMap::new();
    let mut played = HashMap::new();
    for record in matches {
        *wins.entry(record.winner_id).or_insert(0) += 1;
        *played.entry(record.winner_id).or_insert(0) += 1;
        *played.entry(record.loser_id).or_insert(0) += 1;
    }
    (wins, played)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: PlayerId, wins: u32, matches: u32) -> StandingsRow {
        StandingsRow {
            id,
            name: format!("P{id}"),
            wins,
            matches,
        }
    }

    fn player(id: PlayerId) -> Player {
        Player {
            id,
            tournament_id: 1,
            name: format!("P{id}"),
            created_at: None,
        }
    }

    fn game(id: i64, winner_id: PlayerId, loser_id: PlayerId) -> Match {
        Match {
            id,
            tournament_id: 1,
            winner_id,
            loser_id,
            created_at: None,
        }
    }

    #[test]
    fn test_sort_by_wins_then_id() {
        let mut rows = vec![row(4, 1, 2), row(3, 2, 2), row(1, 1, 2), row(2, 2, 2)];
        sort_standings(&mut rows);

        let ids: Vec<PlayerId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
        assert!(is_ranked(&rows));
    }

    #[test]
    fn test_is_ranked_detects_out_of_order_ties() {
        assert!(!is_ranked(&[row(2, 1, 1), row(1, 1, 1)]));
        assert!(!is_ranked(&[row(1, 0, 1), row(2, 1, 1)]));
        assert!(is_ranked(&[]));
    }

    #[test]
    fn test_tally_counts_wins_and_matches() {
        let players = vec![player(1), player(2), player(3)];
        let matches = vec![game(1, 1, 2), game(2, 1, 3), game(3, 3, 2)];

        let rows = tally(&players, &matches);

        assert_eq!(rows, vec![row(1, 2, 2), row(3, 1, 2), row(2, 0, 2)]);
        assert!(rows.iter().all(|r| r.wins <= r.matches));
        assert_eq!(rows[2].losses(), 2);
    }

    #[test]
    fn test_tally_without_matches_keeps_every_player_at_zero() {
        let rows = tally(&[player(2), player(1)], &[]);
        assert_eq!(rows, vec![row(1, 0, 0), row(2, 0, 0)]);
    }
}

use crate::domain::{Pairing, Round, StandingsRow};
use crate::standings::sort_standings;

/// Ranks the field, then pairs 1st with 2nd, 3rd with 4th and so on.
/// An odd player out at the bottom of the standings gets the bye.
pub fn pair_adjacent(rows: &[StandingsRow]) -> Round {
    let mut ranked = rows.to_vec();
    sort_standings(&mut ranked);

    let mut chunks = ranked.chunks_exact(2);
    let pairings = chunks
        .by_ref()
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();
    let bye = chunks.remainder().first().cloned();

    Round { pairings, bye }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn row(id: i64, wins: u32) -> StandingsRow {
        StandingsRow {
            id,
            name: format!("P{id}"),
            wins,
            matches: 3,
        }
    }

    #[test]
    fn test_even_field_covers_everyone_once() {
        let rows: Vec<StandingsRow> = (1..=8).map(|id| row(id, 0)).collect();
        let round = pair_adjacent(&rows);

        assert_eq!(round.pairings.len(), 4);
        assert!(round.bye.is_none());

        let mut seen = HashSet::new();
        for pairing in &round.pairings {
            assert_ne!(pairing.id1, pairing.id2);
            assert!(seen.insert(pairing.id1));
            assert!(seen.insert(pairing.id2));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_lone_one_win_player_meets_a_two_win_player() {
        let rows = vec![row(4, 1), row(1, 2), row(2, 2), row(3, 2)];
        let round = pair_adjacent(&rows);

        let pairs: Vec<(i64, i64)> = round.pairings.iter().map(|p| p.ids()).collect();
        assert_eq!(pairs, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_odd_field_gives_bye_to_last_place() {
        let rows = vec![row(1, 0), row(2, 2), row(3, 1)];
        let round = pair_adjacent(&rows);

        assert_eq!(round.pairings.len(), 1);
        assert_eq!(round.pairings[0].ids(), (2, 3));
        assert_eq!(round.bye.map(|r| r.id), Some(1));
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(pair_adjacent(&[]), Round::default());
    }
}

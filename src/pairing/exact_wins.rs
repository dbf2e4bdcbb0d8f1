use crate::domain::{Pairing, StandingsRow};

/// Pairs every two players whose win totals are identical.
///
/// Each unordered pair appears once (`id1 < id2`), in standings scan order.
/// Players tied with several others show up in several pairs.
pub fn pair_exact_wins(rows: &[StandingsRow]) -> Vec<Pairing> {
    rows.iter()
        .flat_map(|a| {
            rows.iter()
                .filter(move |b| a.id < b.id && a.wins == b.wins)
                .map(move |b| Pairing::between(a, b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, wins: u32) -> StandingsRow {
        StandingsRow {
            id,
            name: name.to_string(),
            wins,
            matches: 2,
        }
    }

    #[test]
    fn test_three_way_tie_yields_every_cross_pair() {
        let rows = vec![row(1, "A", 2), row(2, "B", 2), row(3, "C", 2), row(4, "D", 1)];

        let pairs: Vec<(i64, i64)> = pair_exact_wins(&rows).iter().map(|p| p.ids()).collect();

        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_all_zero_wins_gives_n_choose_two() {
        let rows: Vec<StandingsRow> = (1..=6).map(|id| row(id, "P", 0)).collect();
        assert_eq!(pair_exact_wins(&rows).len(), 15);
    }

    #[test]
    fn test_no_ties_no_pairs() {
        let rows = vec![row(1, "A", 3), row(2, "B", 2), row(3, "C", 1)];
        assert!(pair_exact_wins(&rows).is_empty());
        assert!(pair_exact_wins(&[]).is_empty());
    }

    #[test]
    fn test_lower_id_listed_first_regardless_of_scan_order() {
        let rows = vec![row(9, "Zed", 1), row(4, "Amy", 1)];
        let pairs = pair_exact_wins(&rows);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].id1, 4);
        assert_eq!(pairs[0].name1, "Amy");
        assert_eq!(pairs[0].id2, 9);
    }
}

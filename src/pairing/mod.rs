pub mod adjacent;
pub mod exact_wins;
pub mod policy;

use anyhow::Result;
use log::debug;

pub use adjacent::pair_adjacent;
pub use exact_wins::pair_exact_wins;
pub use policy::PairingPolicy;

use crate::domain::{Pairing, Round, StandingsRow, TournamentId};
use crate::standings::is_ranked;
use crate::storage::TournamentStore;

/// Draws a round from an already-fetched standings list.
pub fn pair_standings(rows: &[StandingsRow], policy: PairingPolicy) -> Round {
    match policy {
        PairingPolicy::ExactWins => Round {
            pairings: pair_exact_wins(rows),
            bye: None,
        },
        PairingPolicy::Adjacent => pair_adjacent(rows),
    }
}

/// Re-derives the standings from the store and draws the next round.
pub fn next_round<S>(store: &S, tournament: TournamentId, policy: PairingPolicy) -> Result<Round>
where
    S: TournamentStore + ?Sized,
{
    let rows = store.standings(tournament)?;
    debug_assert!(is_ranked(&rows), "store returned unranked standings");
    let round = pair_standings(&rows, policy);

    debug!(
        "Tournament {}: {} players, {} pairings ({}), bye: {:?}",
        tournament,
        rows.len(),
        round.pairings.len(),
        policy,
        round.bye.as_ref().map(|r| r.id)
    );

    Ok(round)
}

pub fn pairings<S>(store: &S, tournament: TournamentId, policy: PairingPolicy) -> Result<Vec<Pairing>>
where
    S: TournamentStore + ?Sized,
{
    next_round(store, tournament, policy).map(|round| round.pairings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, wins: u32) -> StandingsRow {
        StandingsRow {
            id,
            name: format!("P{id}"),
            wins,
            matches: 2,
        }
    }

    #[test]
    fn test_exact_wins_never_reports_a_bye() {
        let rows = vec![row(1, 1), row(2, 1), row(3, 0)];
        let round = pair_standings(&rows, PairingPolicy::ExactWins);

        assert_eq!(round.pairings.len(), 1);
        assert!(round.bye.is_none());
    }

    #[test]
    fn test_no_policy_pairs_a_player_with_themselves() {
        let rows: Vec<StandingsRow> = (1..=5).map(|id| row(id, (id % 2) as u32)).collect();

        for policy in [PairingPolicy::ExactWins, PairingPolicy::Adjacent] {
            let round = pair_standings(&rows, policy);
            assert!(round.pairings.iter().all(|p| p.id1 != p.id2));
        }
    }
}

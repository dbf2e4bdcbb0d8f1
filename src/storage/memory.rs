use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, bail, Result};
use chrono::Utc;

use super::TournamentStore;
use crate::database::models::{Match, Player, Tournament};
use crate::domain::{MatchId, PlayerId, StandingsRow, TournamentId};
use crate::standings;

/// In-process store with the same referential rules as the SQLite schema.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    tournaments: Vec<Tournament>,
    players: Vec<Player>,
    matches: Vec<Match>,
    next_tournament_id: TournamentId,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl MemoryState {
    fn has_tournament(&self, id: TournamentId) -> bool {
        self.tournaments.iter().any(|t| t.id == id)
    }

    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

fn assign(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("Memory store lock poisoned"))
    }
}

impl TournamentStore for MemoryStore {
    fn create_tournament(&self, name: &str) -> Result<TournamentId> {
        let mut state = self.lock()?;
        let id = assign(&mut state.next_tournament_id);
        state.tournaments.push(Tournament {
            id,
            name: name.to_string(),
            created_at: Some(Utc::now().naive_utc()),
        });
        Ok(id)
    }

    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>> {
        let state = self.lock()?;
        Ok(state.tournaments.iter().find(|t| t.id == id).cloned())
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        Ok(self.lock()?.tournaments.clone())
    }

    fn register_player(&self, tournament: TournamentId, name: &str) -> Result<PlayerId> {
        let mut state = self.lock()?;
        if !state.has_tournament(tournament) {
            bail!("Failed to insert new player: tournament {} does not exist", tournament);
        }
        let id = assign(&mut state.next_player_id);
        state.players.push(Player {
            id,
            tournament_id: tournament,
            name: name.to_string(),
            created_at: Some(Utc::now().naive_utc()),
        });
        Ok(id)
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let state = self.lock()?;
        Ok(state.players.iter().find(|p| p.id == id).cloned())
    }

    fn count_players(&self, tournament: TournamentId) -> Result<u64> {
        let state = self.lock()?;
        Ok(state
            .players
            .iter()
            .filter(|p| p.tournament_id == tournament)
            .count() as u64)
    }

    fn delete_players(&self, tournament: TournamentId) -> Result<()> {
        let mut state = self.lock()?;
        let referenced = state.matches.iter().any(|m| {
            state.players.iter().any(|p| {
                p.tournament_id == tournament && (p.id == m.winner_id || p.id == m.loser_id)
            })
        });
        if referenced {
            bail!("Failed to delete players: tournament {} still has matches referencing them", tournament);
        }
        state.players.retain(|p| p.tournament_id != tournament);
        Ok(())
    }

    fn report_match(
        &self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId> {
        let mut state = self.lock()?;
        if winner == loser {
            bail!("Failed to insert match: winner and loser are both player {}", winner);
        }
        if !state.has_tournament(tournament) || !state.has_player(winner) || !state.has_player(loser) {
            bail!("Failed to insert match: unknown tournament or player");
        }
        let id = assign(&mut state.next_match_id);
        state.matches.push(Match {
            id,
            tournament_id: tournament,
            winner_id: winner,
            loser_id: loser,
            created_at: Some(Utc::now().naive_utc()),
        });
        Ok(id)
    }

    fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>> {
        let state = self.lock()?;
        Ok(state
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament)
            .cloned()
            .collect())
    }

    fn delete_matches(&self, tournament: TournamentId) -> Result<()> {
        self.lock()?.matches.retain(|m| m.tournament_id != tournament);
        Ok(())
    }

    fn standings(&self, tournament: TournamentId) -> Result<Vec<StandingsRow>> {
        let state = self.lock()?;
        let players: Vec<Player> = state
            .players
            .iter()
            .filter(|p| p.tournament_id == tournament)
            .cloned()
            .collect();
        // Counts span every match a player took part in, like the SQL view
        Ok(standings::tally(&players, &state.matches))
    }
}

use anyhow::Result;
use log::{info, warn};

use crate::config::settings::PairingSettings;
use crate::database::models::{Match, Tournament};
use crate::domain::{MatchId, Pairing, PlayerId, Round, StandingsRow, TournamentId};
use crate::errors::TournamentError;
use crate::pairing::{self, PairingPolicy};
use crate::sanitize;
use crate::storage::TournamentStore;

/// Tournament bookkeeping on top of an injected store.
///
/// Names are sanitized here, and match reports are checked against the
/// tournament's roster before they reach storage.
pub struct TournamentService<S: TournamentStore> {
    store: S,
    settings: PairingSettings,
}

impl<S: TournamentStore> TournamentService<S> {
    pub fn new(store: S, settings: PairingSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> PairingPolicy {
        self.settings.policy
    }

    pub fn create_tournament(&self, name: &str) -> Result<TournamentId> {
        let id = self.store.create_tournament(&sanitize::clean(name))?;
        info!("Created tournament {}", id);
        Ok(id)
    }

    pub fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        self.store.list_tournaments()
    }

    pub fn register_player(&self, tournament: TournamentId, name: &str) -> Result<PlayerId> {
        self.require_tournament(tournament)?;
        let id = self.store.register_player(tournament, &sanitize::clean(name))?;
        info!("Registered player {} in tournament {}", id, tournament);
        Ok(id)
    }

    pub fn count_players(&self, tournament: TournamentId) -> Result<u64> {
        self.store.count_players(tournament)
    }

    pub fn delete_players(&self, tournament: TournamentId) -> Result<()> {
        self.store.delete_players(tournament)
    }

    pub fn report_match(
        &self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId> {
        self.validate_report(tournament, winner, loser)?;

        let id = self.store.report_match(tournament, winner, loser)?;
        info!(
            "Recorded match {} in tournament {}: {} beat {}",
            id, tournament, winner, loser
        );
        Ok(id)
    }

    pub fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>> {
        self.store.list_matches(tournament)
    }

    pub fn delete_matches(&self, tournament: TournamentId) -> Result<()> {
        self.store.delete_matches(tournament)
    }

    pub fn standings(&self, tournament: TournamentId) -> Result<Vec<StandingsRow>> {
        self.store.standings(tournament)
    }

    pub fn pairings(&self, tournament: TournamentId) -> Result<Vec<Pairing>> {
        self.pairings_with(tournament, self.settings.policy)
    }

    pub fn pairings_with(
        &self,
        tournament: TournamentId,
        policy: PairingPolicy,
    ) -> Result<Vec<Pairing>> {
        pairing::pairings(&self.store, tournament, policy)
    }

    pub fn next_round(&self, tournament: TournamentId) -> Result<Round> {
        self.next_round_with(tournament, self.settings.policy)
    }

    pub fn next_round_with(&self, tournament: TournamentId, policy: PairingPolicy) -> Result<Round> {
        pairing::next_round(&self.store, tournament, policy)
    }

    fn require_tournament(&self, tournament: TournamentId) -> Result<()> {
        match self.store.find_tournament(tournament)? {
            Some(_) => Ok(()),
            None => Err(TournamentError::UnknownTournament(tournament).into()),
        }
    }

    fn validate_report(
        &self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<()> {
        if winner == loser {
            return Err(reject(tournament, TournamentError::SelfMatch { player: winner }));
        }

        for player in [winner, loser] {
            let registered = self
                .store
                .find_player(player)?
                .is_some_and(|p| p.tournament_id == tournament);
            if !registered {
                return Err(reject(
                    tournament,
                    TournamentError::PlayerNotInTournament { player, tournament },
                ));
            }
        }

        Ok(())
    }
}

fn reject(tournament: TournamentId, error: TournamentError) -> anyhow::Error {
    warn!("Rejected match report in tournament {}: {}", tournament, error);
    error.into()
}

use anyhow::{Context, Result};
use log::info;

use super::TournamentStore;
use crate::config::settings::DatabaseSettings;
use crate::database::{self, setup, DbPool};
use crate::database::models::{Match, Player, Tournament};
use crate::domain::{MatchId, PlayerId, StandingsRow, TournamentId};
use crate::errors::store_context;

/// SQLite-backed store. Each call checks a connection out of the pool and
/// hands it back when the guard drops, error paths included.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the database file and creates any missing schema objects.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(settings)?;
        let store = Self::new(pool);
        {
            let mut conn = database::get_connection(&store.pool)?;
            setup::ensure_schema(&mut conn)?;
        }
        info!("Opened tournament database at {}", settings.path);
        Ok(store)
    }

    pub fn reset(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::reset_database(&mut conn)
    }
}

impl TournamentStore for SqliteStore {
    fn create_tournament(&self, name: &str) -> Result<TournamentId> {
        let mut conn = database::get_connection(&self.pool)?;
        database::tournaments::insert_tournament(&mut conn, name).map(|t| t.id)
    }

    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::tournaments::find_by_id(&mut conn, id)
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::tournaments::list_all(&mut conn).context("Failed to list tournaments")
    }

    fn register_player(&self, tournament: TournamentId, name: &str) -> Result<PlayerId> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::insert_player(&mut conn, tournament, name)
            .with_context(|| store_context("register player", tournament))
            .map(|p| p.id)
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::find_by_id(&mut conn, id)
    }

    fn count_players(&self, tournament: TournamentId) -> Result<u64> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::count_by_tournament(&mut conn, tournament)
            .with_context(|| store_context("count players", tournament))
    }

    fn delete_players(&self, tournament: TournamentId) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let deleted = database::players::delete_by_tournament(&mut conn, tournament)
            .with_context(|| store_context("delete players", tournament))?;
        info!("Deleted {} players from tournament {}", deleted, tournament);
        Ok(())
    }

    fn report_match(
        &self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId> {
        let mut conn = database::get_connection(&self.pool)?;
        database::matches::insert_match(&mut conn, tournament, winner, loser)
            .with_context(|| store_context("report match", tournament))
            .map(|m| m.id)
    }

    fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::matches::list_by_tournament(&mut conn, tournament)
            .with_context(|| store_context("list matches", tournament))
    }

    fn delete_matches(&self, tournament: TournamentId) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let deleted = database::matches::delete_by_tournament(&mut conn, tournament)
            .with_context(|| store_context("delete matches", tournament))?;
        info!("Deleted {} matches from tournament {}", deleted, tournament);
        Ok(())
    }

    fn standings(&self, tournament: TournamentId) -> Result<Vec<StandingsRow>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::standings::list_by_tournament(&mut conn, tournament)
            .with_context(|| store_context("read standings", tournament))
    }
}

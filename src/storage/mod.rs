mod memory;
mod sqlite;

use anyhow::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::database::models::{Match, Player, Tournament};
use crate::domain::{MatchId, PlayerId, StandingsRow, TournamentId};

/// Persistence for tournaments, players and match records.
///
/// Every call names its tournament explicitly. Inputs arrive already
/// sanitized; implementations store them verbatim.
pub trait TournamentStore: Send + Sync {
    fn create_tournament(&self, name: &str) -> Result<TournamentId>;

    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>>;

    fn list_tournaments(&self) -> Result<Vec<Tournament>>;

    fn register_player(&self, tournament: TournamentId, name: &str) -> Result<PlayerId>;

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn count_players(&self, tournament: TournamentId) -> Result<u64>;

    /// Fails while any match still references one of the players.
    fn delete_players(&self, tournament: TournamentId) -> Result<()>;

    fn report_match(
        &self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId>;

    fn list_matches(&self, tournament: TournamentId) -> Result<Vec<Match>>;

    fn delete_matches(&self, tournament: TournamentId) -> Result<()>;

    /// One row per player, most wins first, ties by ascending id.
    /// Unknown tournaments yield an empty list.
    fn standings(&self, tournament: TournamentId) -> Result<Vec<StandingsRow>>;
}

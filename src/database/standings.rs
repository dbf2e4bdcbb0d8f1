use anyhow::Result;
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{StandingsRow, TournamentId};

/// Reads the `player_standings` view in ranking order (wins desc, id asc).
pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> Result<Vec<StandingsRow>> {
    let sql = "
        SELECT id, name, wins, matches
        FROM player_standings
        WHERE tournament_id = ?1
        ORDER BY wins DESC, id ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(StandingsRow {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

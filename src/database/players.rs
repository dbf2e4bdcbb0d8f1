use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;
use crate::domain::{PlayerId, TournamentId};

pub fn insert_player(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    name: &str,
) -> Result<Player> {
    let sql = "INSERT INTO players (tournament_id, name) VALUES (?1, ?2) RETURNING id, tournament_id, name, created_at";

    conn.query_row(sql, params![tournament_id, name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, tournament_id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn count_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> Result<u64> {
    let sql = "SELECT COUNT(*) FROM players WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to count players")
}

pub fn delete_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> Result<usize> {
    let sql = "DELETE FROM players WHERE tournament_id = ?1";

    conn.execute(sql, params![tournament_id])
        .context("Failed to delete players")
}

use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::domain::{PlayerId, TournamentId};

pub fn insert_match(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> Result<Match> {
    let sql = "INSERT INTO matches (tournament_id, winner_id, loser_id) VALUES (?1, ?2, ?3) RETURNING id, tournament_id, winner_id, loser_id, created_at";

    conn.query_row(
        sql,
        params![tournament_id, winner_id, loser_id],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        winner_id: row.get(2)?,
        loser_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn list_by_tournament(
    conn: &mut DbConn,
    tournament_id: TournamentId,
) -> Result<Vec<Match>> {
    let sql = "SELECT id, tournament_id, winner_id, loser_id, created_at FROM matches WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> Result<usize> {
    let sql = "DELETE FROM matches WHERE tournament_id = ?1";

    conn.execute(sql, params![tournament_id])
        .context("Failed to delete matches")
}

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{MatchId, PlayerId, TournamentId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}

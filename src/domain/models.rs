use serde::Serialize;

pub type TournamentId = i64;
pub type PlayerId = i64;
pub type MatchId = i64;

/// Per-player summary derived from match records at read time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingsRow {
    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }
}

/// Two players assigned to meet in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn between(first: &StandingsRow, second: &StandingsRow) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}

/// Pairings for the next round, plus the player sitting out when the field is odd
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Round {
    pub pairings: Vec<Pairing>,
    pub bye: Option<StandingsRow>,
}

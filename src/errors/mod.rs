use thiserror::Error;

use crate::domain::{PlayerId, TournamentId};

/// Rejections raised before anything reaches storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("player {player} cannot be both winner and loser of a match")]
    SelfMatch { player: PlayerId },

    #[error("player {player} is not registered in tournament {tournament}")]
    PlayerNotInTournament {
        player: PlayerId,
        tournament: TournamentId,
    },

    #[error("tournament {0} does not exist")]
    UnknownTournament(TournamentId),

    #[error("unknown pairing policy: {0} (expected `exact-wins` or `adjacent`)")]
    UnknownPolicy(String),
}

/// Context message for a failed store operation
pub fn store_context(operation: &str, tournament: TournamentId) -> String {
    format!("Failed to {} for tournament {}", operation, tournament)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_ids() {
        let err = TournamentError::PlayerNotInTournament {
            player: 7,
            tournament: 2,
        };
        assert_eq!(err.to_string(), "player 7 is not registered in tournament 2");
        assert_eq!(
            store_context("count players", 3),
            "Failed to count players for tournament 3"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = TournamentError::SelfMatch { player: 4 }.into();
        assert_eq!(
            err.downcast_ref::<TournamentError>(),
            Some(&TournamentError::SelfMatch { player: 4 })
        );
    }
}

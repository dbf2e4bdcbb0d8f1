use std::fmt;
use std::str::FromStr;

use crate::errors::TournamentError;

/// How the next round is drawn from the standings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingPolicy {
    /// Every pair of players with identical win totals; a player may appear in several pairs
    ExactWins,
    /// Walk the standings and pair neighbours, each player at most once
    #[default]
    Adjacent,
}

impl PairingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingPolicy::ExactWins => "exact-wins",
            PairingPolicy::Adjacent => "adjacent",
        }
    }
}

impl fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairingPolicy {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "exact-wins" | "exact" => Ok(PairingPolicy::ExactWins),
            "adjacent" | "swiss" => Ok(PairingPolicy::Adjacent),
            other => Err(TournamentError::UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_display_names() {
        for policy in [PairingPolicy::ExactWins, PairingPolicy::Adjacent] {
            assert_eq!(policy.to_string().parse::<PairingPolicy>(), Ok(policy));
        }
        assert_eq!(
            "EXACT_WINS".parse::<PairingPolicy>(),
            Ok(PairingPolicy::ExactWins)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "random".parse::<PairingPolicy>(),
            Err(TournamentError::UnknownPolicy("random".to_string()))
        );
    }
}

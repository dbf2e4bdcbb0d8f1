use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{PlayerId, TournamentId};
use crate::pairing::PairingPolicy;

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament bookkeeping and pairings")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or swiss_tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate every table
    Reset,
    /// Create a tournament and print its id
    CreateTournament { name: String },
    /// List tournaments
    Tournaments,
    /// Register a player and print their id
    Register { tournament: TournamentId, name: String },
    /// Number of players registered in a tournament
    Count { tournament: TournamentId },
    /// Record the outcome of a match
    Report {
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    },
    /// Current standings, most wins first
    Standings {
        tournament: TournamentId,
        #[arg(long)]
        json: bool,
    },
    /// Pairings for the next round
    Pairings {
        tournament: TournamentId,
        /// exact-wins or adjacent (defaults to $PAIRING_POLICY or adjacent)
        #[arg(short, long)]
        policy: Option<PairingPolicy>,
        #[arg(long)]
        json: bool,
    },
    /// Remove every match of a tournament
    DeleteMatches { tournament: TournamentId },
    /// Remove every player of a tournament
    DeletePlayers { tournament: TournamentId },
    /// Print shell completions
    Completions { shell: Shell },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pairings_accepts_policy_flag() {
        let cli = Cli::try_parse_from([
            "swiss-tournament",
            "--database",
            "league.db",
            "pairings",
            "3",
            "--policy",
            "exact-wins",
        ])
        .unwrap();

        assert_eq!(cli.database.as_deref(), Some("league.db"));
        assert_eq!(
            cli.command,
            Command::Pairings {
                tournament: 3,
                policy: Some(PairingPolicy::ExactWins),
                json: false,
            }
        );
    }

    #[test]
    fn test_unknown_policy_is_a_usage_error() {
        let result = Cli::try_parse_from(["swiss-tournament", "pairings", "1", "--policy", "coin-flip"]);
        assert!(result.is_err());
    }
}

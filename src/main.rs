use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    handle_completions, handle_count, handle_create_tournament, handle_delete_matches,
    handle_delete_players, handle_pairings, handle_register, handle_report, handle_reset,
    handle_standings, handle_tournaments, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = AppConfig::new().with_database_path(cli.database);
    execute_command(&config, &cli.command)
}

fn execute_command(config: &AppConfig, command: &Command) -> Result<()> {
    match command {
        Command::Reset => handle_reset(config),
        Command::CreateTournament { name } => handle_create_tournament(config, name),
        Command::Tournaments => handle_tournaments(config),
        Command::Register { tournament, name } => handle_register(config, *tournament, name),
        Command::Count { tournament } => handle_count(config, *tournament),
        Command::Report {
            tournament,
            winner,
            loser,
        } => handle_report(config, *tournament, *winner, *loser),
        Command::Standings { tournament, json } => handle_standings(config, *tournament, *json),
        Command::Pairings {
            tournament,
            policy,
            json,
        } => handle_pairings(config, *tournament, *policy, *json),
        Command::DeleteMatches { tournament } => handle_delete_matches(config, *tournament),
        Command::DeletePlayers { tournament } => handle_delete_players(config, *tournament),
        Command::Completions { shell } => {
            handle_completions(*shell);
            Ok(())
        }
    }
}

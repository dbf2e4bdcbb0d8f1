pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod render;
pub mod sanitize;
pub mod services;
pub mod standings;
pub mod storage;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::domain::{PlayerId, TournamentId};
use crate::pairing::PairingPolicy;
use crate::services::TournamentService;
use crate::storage::SqliteStore;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn open_service(config: &AppConfig) -> Result<TournamentService<SqliteStore>> {
    let store = SqliteStore::open(&config.database)?;
    Ok(TournamentService::new(store, config.pairing.clone()))
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    service.store().reset()
}

pub fn handle_create_tournament(config: &AppConfig, name: &str) -> Result<()> {
    let id = open_service(config)?.create_tournament(name)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_tournaments(config: &AppConfig) -> Result<()> {
    let tournaments = open_service(config)?.list_tournaments()?;
    print!("{}", render::tournament_list(&tournaments));
    Ok(())
}

pub fn handle_register(config: &AppConfig, tournament: TournamentId, name: &str) -> Result<()> {
    let id = open_service(config)?.register_player(tournament, name)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_count(config: &AppConfig, tournament: TournamentId) -> Result<()> {
    println!("{}", open_service(config)?.count_players(tournament)?);
    Ok(())
}

pub fn handle_report(
    config: &AppConfig,
    tournament: TournamentId,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<()> {
    let id = open_service(config)?.report_match(tournament, winner, loser)?;
    println!("{}", id);
    Ok(())
}

pub fn handle_standings(config: &AppConfig, tournament: TournamentId, json: bool) -> Result<()> {
    let rows = open_service(config)?.standings(tournament)?;
    if json {
        println!("{}", render::to_json(&rows)?);
    } else {
        print!("{}", render::standings_table(&rows));
    }
    Ok(())
}

pub fn handle_pairings(
    config: &AppConfig,
    tournament: TournamentId,
    policy: Option<PairingPolicy>,
    json: bool,
) -> Result<()> {
    let service = open_service(config)?;
    let round = service.next_round_with(tournament, policy.unwrap_or(service.policy()))?;
    if json {
        println!("{}", render::to_json(&round)?);
    } else {
        print!("{}", render::round_table(&round));
    }
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig, tournament: TournamentId) -> Result<()> {
    open_service(config)?.delete_matches(tournament)
}

pub fn handle_delete_players(config: &AppConfig, tournament: TournamentId) -> Result<()> {
    open_service(config)?.delete_players(tournament)
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

pub mod tournament;

pub use tournament::TournamentService;

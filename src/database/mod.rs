pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod standings;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;

//! Errors raised while reading the magazine catalogue
//!
//! Catalogue queries only ever produce `Database` or `NotFound`; the other
//! variants come from config loading and argument parsing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// SQLite rejected or failed a catalogue query: bad statement, missing
    /// table, closed pool, unreadable file
    #[error("Catalogue query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Config file could not be read
    #[error("Config file unreadable: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was read but is not valid TOML for `TomlConfig`
    #[error("Invalid config: {0}")]
    Config(String),

    /// No magazine with the requested id, or no database file at the path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Value that is not a known author role
    #[error("Invalid author role: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True when a single-row lookup found nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

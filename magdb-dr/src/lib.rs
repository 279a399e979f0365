//! magdb-dr library - Database Review tool
//!
//! Read-only inspection of the magazine catalogue from the command line.
//! Each invocation runs exactly one query and returns its result as JSON.

use clap::{Parser, Subcommand};
use magdb_common::db::{self, AuthorRole};
use magdb_common::config::TomlConfig;
use magdb_common::{content_type_label, Error, Result};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

/// Command-line arguments for magdb-dr
#[derive(Parser, Debug)]
#[command(name = "magdb-dr")]
#[command(about = "Read-only review of the magazine catalogue database")]
#[command(version)]
pub struct Cli {
    /// Catalogue database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Config file (default: platform config dir, then /etc/magdb on Linux)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all magazines by id
    Magazines,

    /// List all issues by id
    Issues,

    /// List all titles by title
    Titles,

    /// List all authors by name
    Authors,

    /// Authors credited on a title with the given role
    AuthorsByRole {
        title_id: i64,

        /// AUTHOR or SCRIPT
        role: AuthorRole,
    },

    /// Show one magazine
    Magazine { id: String },

    /// Label for a content type code (no database needed)
    ContentLabel {
        #[arg(allow_negative_numbers = true)]
        code: Option<i64>,
    },
}

/// Load the config file, falling back to defaults when it cannot be read
///
/// A missing or malformed file never aborts startup. The error is handed
/// back so the caller can warn once logging is up.
pub fn load_config(explicit: Option<&Path>) -> (TomlConfig, Option<Error>) {
    match TomlConfig::discover(explicit) {
        Ok(config) => (config, None),
        Err(e) => (TomlConfig::default(), Some(e)),
    }
}

/// JSON answer for `content-label`
pub fn content_label(code: Option<i64>) -> Value {
    json!({
        "code": code,
        "label": content_type_label(code),
    })
}

/// Run one command against an open catalogue pool
///
/// Query errors are returned unchanged.
pub async fn run(command: &Command, pool: &SqlitePool) -> Result<Value> {
    let value = match command {
        Command::Magazines => json!(db::list_magazines(pool).await?),
        Command::Issues => json!(db::list_issues(pool).await?),
        Command::Titles => json!(db::list_titles(pool).await?),
        Command::Authors => json!(db::list_authors(pool).await?),
        Command::AuthorsByRole { title_id, role } => {
            json!(db::get_authors_by_role(pool, *title_id, *role).await?)
        }
        Command::Magazine { id } => json!(db::get_magazine_by_id(pool, id).await?),
        Command::ContentLabel { code } => content_label(*code),
    };

    Ok(value)
}

//! Read-only store connection
//!
//! The catalogue is maintained elsewhere; every connection opened here is
//! read-only.

use crate::{Error, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Open an existing catalogue database in read-only mode
///
/// Fails with `Error::NotFound` if the file does not exist, so a missing
/// database is never silently created. The path is handed to SQLite as a
/// file name, never parsed as a URL.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::NotFound(format!(
            "database file {}",
            db_path.display()
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);
    debug!("Connecting read-only to {}", db_path.display());

    let pool = SqlitePool::connect_with(options).await?;
    info!("Opened database (read-only): {}", db_path.display());

    Ok(pool)
}

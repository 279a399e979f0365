//! magdb-dr (Database Review) - Read-only catalogue inspection tool
//!
//! Prints the result of one catalogue query as JSON on stdout. Logs go to
//! stderr.

use anyhow::{Context, Result};
use clap::Parser;
use magdb_common::config::{resolve_database_path, DATABASE_ENV_VAR};
use magdb_common::db::connect_readonly;
use magdb_dr::{content_label, load_config, run, Cli, Command};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Config is read before tracing so its log_level can seed the filter
    let (config, config_error) = load_config(args.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("Ignoring config file, using defaults: {}", e);
    }

    if let Command::ContentLabel { code } = args.command {
        return print_json(&content_label(code));
    }

    let db_path = resolve_database_path(args.database.as_deref(), DATABASE_ENV_VAR, &config);
    info!("Database path: {}", db_path.display());

    let pool = connect_readonly(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let result = run(&args.command, &pool).await;
    pool.close().await;

    print_json(&result.with_context(|| format!("{:?} failed", args.command))?)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode result")?;
    println!("{}", text);
    Ok(())
}

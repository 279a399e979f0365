//! Fixture database builders for integration tests
//!
//! Fixtures are written through a read-write pool, closed, then reopened
//! through `connect_readonly` the same way callers open the catalogue.

#![allow(dead_code)]

use magdb_common::db::connect_readonly;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE magazines (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        publisher TEXT,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE issues (
        id TEXT PRIMARY KEY,
        magazine_id TEXT NOT NULL REFERENCES magazines(id),
        title TEXT NOT NULL,
        cover_url TEXT,
        toc_url TEXT,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE titles (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        content_type INTEGER NOT NULL,
        publication TEXT NOT NULL,
        completion INTEGER NOT NULL DEFAULT 0,
        description TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE contents (
        issue_id TEXT NOT NULL REFERENCES issues(id),
        order_no INTEGER NOT NULL,
        title_id INTEGER NOT NULL REFERENCES titles(id),
        page_no INTEGER NOT NULL,
        content_type INTEGER NOT NULL,
        color INTEGER,
        serialization_status INTEGER,
        description TEXT,
        PRIMARY KEY (issue_id, order_no)
    )
    "#,
    r#"
    CREATE TABLE authors (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        kana TEXT NOT NULL,
        author_type TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE title_authors (
        title_id INTEGER NOT NULL REFERENCES titles(id),
        author_id INTEGER NOT NULL REFERENCES authors(id),
        author_type TEXT NOT NULL CHECK (author_type IN ('AUTHOR', 'SCRIPT')),
        PRIMARY KEY (title_id, author_id, author_type)
    )
    "#,
];

// Rows are inserted out of their expected query order on purpose
const ROWS: &[&str] = &[
    "INSERT INTO magazines VALUES ('M2', 'Monthly Y', 'Publisher B', NULL)",
    "INSERT INTO magazines VALUES ('M1', 'Weekly X', 'Publisher A', 'Flagship weekly')",
    "INSERT INTO issues VALUES ('M2-2024-01', 'M2', 'Monthly Y 2024/01', NULL, NULL, NULL)",
    "INSERT INTO issues VALUES ('M1-2024-02', 'M1', 'Weekly X 2024 #2', 'https://example.com/c2.jpg', NULL, NULL)",
    "INSERT INTO issues VALUES ('M1-2024-01', 'M1', 'Weekly X 2024 #1', 'https://example.com/c1.jpg', 'https://example.com/toc1', 'New year issue')",
    "INSERT INTO titles VALUES (1, 'Zeta Quest', 1, 'Weekly X', 0, 'Long-running adventure')",
    "INSERT INTO titles VALUES (2, 'Alpha Story', 0, 'Weekly X', 1, '')",
    "INSERT INTO titles VALUES (3, 'Mid Run', 2, 'Monthly Y', 0, 'Guest run')",
    "INSERT INTO titles VALUES (4, 'Orphan Work', 0, 'Monthly Y', 1, 'No credited authors')",
    "INSERT INTO authors VALUES (1, 'Tanaka Ichiro', 'たなか いちろう', 'AUTHOR', '')",
    "INSERT INTO authors VALUES (2, 'Sato Hanako', 'さとう はなこ', 'SCRIPT', 'Writer')",
    "INSERT INTO authors VALUES (3, 'Abe Jiro', 'あべ じろう', 'AUTHOR', '')",
    "INSERT INTO title_authors VALUES (1, 1, 'AUTHOR')",
    "INSERT INTO title_authors VALUES (1, 2, 'SCRIPT')",
    "INSERT INTO title_authors VALUES (2, 3, 'AUTHOR')",
    // Sato is a script writer by default but draws title 2
    "INSERT INTO title_authors VALUES (2, 2, 'AUTHOR')",
    "INSERT INTO title_authors VALUES (3, 3, 'SCRIPT')",
    "INSERT INTO contents VALUES ('M1-2024-01', 1, 1, 3, 1, 1, 12, NULL)",
    "INSERT INTO contents VALUES ('M1-2024-01', 2, 2, 41, 0, NULL, NULL, 'Bonus one-shot')",
];

/// Database file inside `dir`, written and closed
async fn write_database(dir: &Path, statements: &[&str]) -> PathBuf {
    let db_path = dir.join("catalogue.db");
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Should create fixture database");

    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Fixture statement failed: {}\n{}", e, statement));
    }

    pool.close().await;
    db_path
}

/// Schema plus the standard fixture rows, opened read-only
///
/// Returns (TempDir, SqlitePool) - TempDir must be kept alive for duration of test
pub async fn create_fixture_db() -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let statements: Vec<&str> = SCHEMA.iter().chain(ROWS.iter()).copied().collect();
    let db_path = write_database(temp_dir.path(), &statements).await;

    let pool = connect_readonly(&db_path)
        .await
        .expect("Should open fixture read-only");
    (temp_dir, pool)
}

/// Schema with every table empty, opened read-only
pub async fn create_empty_db() -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let db_path = write_database(temp_dir.path(), SCHEMA).await;

    let pool = connect_readonly(&db_path)
        .await
        .expect("Should open fixture read-only");
    (temp_dir, pool)
}

/// Valid SQLite file with no catalogue tables, opened read-only
pub async fn create_schemaless_db() -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let db_path = write_database(temp_dir.path(), &["CREATE TABLE unrelated (x INTEGER)"]).await;

    let pool = connect_readonly(&db_path)
        .await
        .expect("Should open fixture read-only");
    (temp_dir, pool)
}

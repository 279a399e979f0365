//! Catalogue read queries
//!
//! One fixed, parameterized statement per function. Every call is
//! single-shot: store errors are returned unchanged, nothing is retried or
//! cached.
//!
//! The list queries and `get_magazine_by_id` report any failure through
//! the error branch. `get_authors_by_role` alone treats zero matches as a
//! successful empty result.

use super::models::{Author, AuthorRole, Issue, Magazine, Title};
use crate::{Error, Result};
use sqlx::SqlitePool;

/// All magazines, ordered by id
pub async fn list_magazines(db: &SqlitePool) -> Result<Vec<Magazine>> {
    let magazines = sqlx::query_as::<_, Magazine>("SELECT * FROM magazines ORDER BY id")
        .fetch_all(db)
        .await?;

    Ok(magazines)
}

/// All issues, ordered by id
pub async fn list_issues(db: &SqlitePool) -> Result<Vec<Issue>> {
    let issues = sqlx::query_as::<_, Issue>("SELECT * FROM issues ORDER BY id")
        .fetch_all(db)
        .await?;

    Ok(issues)
}

/// All titles, ordered by title text
pub async fn list_titles(db: &SqlitePool) -> Result<Vec<Title>> {
    let titles = sqlx::query_as::<_, Title>("SELECT * FROM titles ORDER BY title")
        .fetch_all(db)
        .await?;

    Ok(titles)
}

/// All authors, ordered by name
pub async fn list_authors(db: &SqlitePool) -> Result<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY name")
        .fetch_all(db)
        .await?;

    Ok(authors)
}

/// Authors linked to `title_id` with the given role
///
/// Row order is whatever the join produces. A title with no matching
/// relation yields an empty vector, not an error.
pub async fn get_authors_by_role(
    db: &SqlitePool,
    title_id: i64,
    role: AuthorRole,
) -> Result<Vec<Author>> {
    // Both tables carry author_type; the filter is on the relation's role
    let authors = sqlx::query_as::<_, Author>(
        r#"
        SELECT a.*
        FROM title_authors AS r
        JOIN authors AS a ON a.id = r.author_id
        WHERE r.title_id = ? AND r.author_type = ?
        "#,
    )
    .bind(title_id)
    .bind(role.as_str())
    .fetch_all(db)
    .await?;

    Ok(authors)
}

/// Single magazine by id
///
/// Fails with `Error::NotFound` when no row matches.
pub async fn get_magazine_by_id(db: &SqlitePool, id: &str) -> Result<Magazine> {
    sqlx::query_as::<_, Magazine>("SELECT * FROM magazines WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| Error::NotFound(format!("magazine {}", id)))
}

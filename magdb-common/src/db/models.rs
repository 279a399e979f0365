//! Database models
//!
//! Row types for the catalogue tables. All rows are owned by the store;
//! this crate only reads them.

use crate::labels::ContentKind;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Magazine {
    pub id: String,
    pub title: String,
    pub publisher: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Issue {
    pub id: String,
    pub magazine_id: String,
    pub title: String,
    pub cover_url: Option<String>,
    pub toc_url: Option<String>,
    pub description: Option<String>,
}

/// A serialized work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Title {
    pub id: i64,
    pub title: String,
    pub content_type: i64,
    pub publication: String,
    pub completion: i64,
    pub description: String,
}

impl Title {
    pub fn kind(&self) -> Option<ContentKind> {
        ContentKind::from_code(self.content_type)
    }

    pub fn is_complete(&self) -> bool {
        self.completion != 0
    }
}

/// One work's appearance within an issue, keyed by (issue_id, order_no)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Content {
    pub issue_id: String,
    pub order_no: i64,
    pub title_id: i64,
    pub page_no: i64,
    pub content_type: i64,
    pub color: Option<i64>,
    pub serialization_status: Option<i64>,
    pub description: Option<String>,
}

impl Content {
    pub fn kind(&self) -> Option<ContentKind> {
        ContentKind::from_code(self.content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    /// Phonetic reading of `name`
    pub kana: String,
    pub author_type: String,
    pub description: String,
}

/// Row of the `title_authors` join table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TitleAuthor {
    pub title_id: i64,
    pub author_id: i64,
    pub author_type: String,
}

impl TitleAuthor {
    /// Role on this relation, `None` if the stored value is not a known role
    pub fn role(&self) -> Option<AuthorRole> {
        self.author_type.parse().ok()
    }
}

/// Role of an author on a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthorRole {
    /// Artist / principal author
    Author,
    /// Writer of the script
    Script,
}

impl AuthorRole {
    /// Value stored in `title_authors.author_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorRole::Author => "AUTHOR",
            AuthorRole::Script => "SCRIPT",
        }
    }
}

impl FromStr for AuthorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTHOR" => Ok(AuthorRole::Author),
            "SCRIPT" => Ok(AuthorRole::Script),
            other => Err(Error::InvalidInput(format!(
                "'{}' (expected AUTHOR or SCRIPT)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AuthorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! # magdb Common Library
//!
//! Read-only data access for the magazine catalogue:
//! - Database models (magazines, issues, titles, contents, authors)
//! - Query gateway over an open SQLite pool
//! - Content type labels
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod labels;

pub use error::{Error, Result};
pub use labels::{content_type_label, ContentKind};

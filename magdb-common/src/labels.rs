//! Content type codes and their display labels
//!
//! `content_type` columns on `titles` and `contents` hold a small integer
//! code. Codes outside the known set have no label.

use serde::{Deserialize, Serialize};

/// How a work appears in an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// Code 0: complete in a single issue
    OneShot,

    /// Code 1: ongoing serialization
    Serialized,

    /// Code 2: guest run in another magazine
    GuestAppearance,
}

impl ContentKind {
    /// Map a stored code to a kind, `None` for unknown codes
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ContentKind::OneShot),
            1 => Some(ContentKind::Serialized),
            2 => Some(ContentKind::GuestAppearance),
            _ => None,
        }
    }

    /// Stored integer code
    pub fn code(&self) -> i64 {
        match self {
            ContentKind::OneShot => 0,
            ContentKind::Serialized => 1,
            ContentKind::GuestAppearance => 2,
        }
    }

    /// Display label shown to readers
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::OneShot => "読み切り",
            ContentKind::Serialized => "連載",
            ContentKind::GuestAppearance => "出張掲載",
        }
    }

    pub fn all_variants() -> &'static [ContentKind] {
        &[
            ContentKind::OneShot,
            ContentKind::Serialized,
            ContentKind::GuestAppearance,
        ]
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label for a nullable content type code
///
/// Total over its input: a missing code or one outside {0, 1, 2}
/// yields an empty string.
pub fn content_type_label(content_type: Option<i64>) -> &'static str {
    content_type
        .and_then(ContentKind::from_code)
        .map(|kind| kind.label())
        .unwrap_or("")
}

//! # Domain Models
//!
//! These structs represent the core entities of the idea board.
//! Identifiers are opaque strings; freshly minted ones are UUID v7 text so
//! they stay unique and time-ordered, but anything read back from storage is
//! accepted as-is.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author label stamped on locally created ideas and comments.
pub const DEFAULT_AUTHOR: &str = "You";

/// Opaque, immutable identifier of an [`Idea`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub String);

impl IdeaId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IdeaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a [`Comment`], unique within its parent idea.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A user-submitted post: the fundamental unit of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    /// Lowercase, trimmed, non-empty. Input order kept, duplicates allowed.
    pub tags: Vec<String>,
    /// Never negative; downvotes clamp at zero.
    pub votes: u32,
    /// Oldest first.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

impl Idea {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }
}

/// A remark attached to exactly one idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

/// Process-wide visual mode, persisted under the `theme` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Accepts the bare word form (`dark`) as well as surrounding whitespace.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Ordering applied by the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Newest `created_at` first.
    #[default]
    Recent,
    /// Highest vote count first.
    Votes,
    /// Keep collection order.
    Unsorted,
}

impl SortMode {
    /// Lenient parse: unknown values mean "leave the order alone".
    pub fn parse(raw: &str) -> Self {
        match raw {
            "recent" => SortMode::Recent,
            "votes" => SortMode::Votes,
            _ => SortMode::Unsorted,
        }
    }
}

impl From<&str> for SortMode {
    fn from(raw: &str) -> Self {
        SortMode::parse(raw)
    }
}

/// Filter state: transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring of `title + " " + description`. Empty matches all.
    pub query: String,
    /// Exact tag to require. Empty matches all.
    pub tag: String,
    pub sort: SortMode,
}

impl ViewQuery {
    pub fn new(query: impl Into<String>, tag: impl Into<String>, sort: SortMode) -> Self {
        Self {
            query: query.into(),
            tag: tag.into(),
            sort,
        }
    }
}

/// Form state for a new idea: raw user text, reset after a successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    /// Comma separated, e.g. `"rust, Tooling"`.
    pub tags: String,
}

impl IdeaDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.tags.is_empty()
    }
}

/// Splits raw comma-separated tag input into normalised tags.
///
/// Pieces are trimmed and lowercased; empty pieces are dropped. Duplicates
/// are kept in input order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

//! Shared fixtures for the cross-crate tests.

use chrono::{Duration, TimeZone, Utc};
use ib_core::{Comment, CommentId, Idea, IdeaId};

/// A deterministic idea created `age_minutes` before a fixed instant.
pub fn idea(id: &str, title: &str, tags: &[&str], votes: u32, age_minutes: i64) -> Idea {
    let base = Utc
        .with_ymd_and_hms(2025, 1, 15, 8, 0, 0)
        .single()
        .unwrap_or_default();
    Idea {
        id: IdeaId::from(id),
        title: title.to_string(),
        description: format!("About {title}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        votes,
        comments: Vec::new(),
        created_at: base - Duration::minutes(age_minutes),
        author: "fixture".to_string(),
    }
}

pub fn with_comment(mut idea: Idea, id: &str, text: &str) -> Idea {
    let created_at = idea.created_at + Duration::minutes(1);
    idea.comments.push(Comment {
        id: CommentId::from(id),
        text: text.to_string(),
        created_at,
        author: "fixture".to_string(),
    });
    idea
}

/// The JSON a board writes under `ideas_v1` for `ideas`.
pub fn ideas_json(ideas: &[Idea]) -> String {
    serde_json::to_string(ideas).unwrap_or_default()
}

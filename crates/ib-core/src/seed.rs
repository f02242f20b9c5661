//! Example content shown on first launch, or when the persisted idea list
//! cannot be read back.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Idea, IdeaId};

pub const SEED_AUTHOR: &str = "Team";

/// The fixed seed list. Ids and timestamps are constant so the fallback is
/// reproducible across launches.
pub fn seed_ideas() -> Vec<Idea> {
    vec![
        Idea {
            id: IdeaId::from("seed-dark-mode-scheduler"),
            title: "Dark mode scheduler".to_string(),
            description: "Switch the theme automatically at sunset and back at sunrise.".to_string(),
            tags: vec!["ui".to_string(), "accessibility".to_string()],
            votes: 12,
            comments: Vec::new(),
            created_at: at(2024, 3, 2, 9, 30),
            author: SEED_AUTHOR.to_string(),
        },
        Idea {
            id: IdeaId::from("seed-weekly-digest"),
            title: "Weekly idea digest".to_string(),
            description: "Collect the most upvoted ideas of the week into a single summary.".to_string(),
            tags: vec!["productivity".to_string(), "email".to_string()],
            votes: 5,
            comments: Vec::new(),
            created_at: at(2024, 3, 1, 16, 0),
            author: SEED_AUTHOR.to_string(),
        },
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

//! # Derived View
//!
//! Pure projection of the idea collection: tag filter, then text search,
//! then a stable sort. Holds no state; callers recompute whenever the ideas
//! or the [`ViewQuery`] change.

use std::collections::HashSet;

use crate::models::{Idea, SortMode, ViewQuery};

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub ideas: Vec<&'a Idea>,
    /// Every tag on the board (not just the visible ideas), first-seen order.
    pub tags: Vec<&'a str>,
}

pub fn compute_view<'a>(ideas: &'a [Idea], view: &ViewQuery) -> BoardView<'a> {
    let needle = view.query.to_lowercase();

    let mut visible: Vec<&Idea> = ideas
        .iter()
        .filter(|idea| view.tag.is_empty() || idea.has_tag(&view.tag))
        .filter(|idea| needle.is_empty() || matches_query(idea, &needle))
        .collect();

    // sort_by is stable, so ties keep collection order.
    match view.sort {
        SortMode::Recent => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Votes => visible.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortMode::Unsorted => {}
    }

    BoardView {
        ideas: visible,
        tags: distinct_tags(ideas),
    }
}

/// All tags across `ideas`, deduplicated, in first-seen order.
pub fn distinct_tags(ideas: &[Idea]) -> Vec<&str> {
    let mut seen = HashSet::new();
    ideas
        .iter()
        .flat_map(|idea| idea.tags.iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Searches `title + " " + description`, so a match may span both fields.
/// `needle` must already be lowercase.
fn matches_query(idea: &Idea, needle: &str) -> bool {
    let mut haystack = idea.title.to_lowercase();
    haystack.push(' ');
    haystack.push_str(&idea.description.to_lowercase());
    haystack.contains(needle)
}

//! # IdeaStore
//!
//! The single owner of board state. Every mutation goes through a named
//! operation, completes in memory, and is then written through to the
//! [`KeyValueStore`] under its fixed key.
//!
//! Operations never fail. Empty input and unknown ids come back as
//! [`Mutation::Unchanged`]; persistence failures are logged and the
//! in-memory change stands.

use chrono::Utc;

use crate::error::BoardError;
use crate::models::{
    parse_tags, Comment, CommentId, Idea, IdeaDraft, IdeaId, SortMode, Theme, ViewQuery,
    DEFAULT_AUTHOR,
};
use crate::persist;
use crate::seed::seed_ideas;
use crate::traits::KeyValueStore;
use crate::view::{compute_view, BoardView};

/// Result of a store operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Unchanged,
}

impl Mutation {
    pub fn is_applied(self) -> bool {
        matches!(self, Mutation::Applied)
    }
}

pub struct IdeaStore<K: KeyValueStore> {
    kv: K,
    ideas: Vec<Idea>,
    saved: Vec<IdeaId>,
    theme: Theme,
    author: String,
    draft: IdeaDraft,
    filters: ViewQuery,
}

impl<K: KeyValueStore> IdeaStore<K> {
    /// Restores state from `kv`, falling back per key when a value is
    /// missing or unreadable: seed ideas, dark theme, nothing saved.
    pub fn load(kv: K) -> Self {
        let ideas = persist::read_ideas(&kv)
            .unwrap_or_else(degraded)
            .unwrap_or_else(seed_ideas);
        let theme = persist::read_theme(&kv)
            .unwrap_or_else(degraded)
            .unwrap_or_default();
        let saved = persist::read_saved(&kv)
            .unwrap_or_else(degraded)
            .unwrap_or_default();

        log::debug!(
            "board loaded: {} ideas, {} saved, {} theme",
            ideas.len(),
            saved.len(),
            theme.as_str()
        );

        Self {
            kv,
            ideas,
            saved,
            theme,
            author: DEFAULT_AUTHOR.to_string(),
            draft: IdeaDraft::default(),
            filters: ViewQuery::default(),
        }
    }

    /// Overrides the label stamped on new ideas and comments.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    /// Ideas in collection order (newest submission first).
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| &idea.id == id)
    }

    pub fn saved_ids(&self) -> &[IdeaId] {
        &self.saved
    }

    pub fn is_saved(&self, id: &IdeaId) -> bool {
        self.saved.contains(id)
    }

    /// Saved ideas in saved-list order. Ids with no matching idea are skipped.
    pub fn saved_ideas(&self) -> Vec<&Idea> {
        self.saved.iter().filter_map(|id| self.idea(id)).collect()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn draft(&self) -> &IdeaDraft {
        &self.draft
    }

    pub fn filters(&self) -> &ViewQuery {
        &self.filters
    }

    /// The derived view for the current filter state.
    pub fn view(&self) -> BoardView<'_> {
        compute_view(&self.ideas, &self.filters)
    }

    // ── Idea collection ──────────────────────────────────────────────────────

    /// Creates a new idea at the front of the collection.
    ///
    /// Unchanged if `title` or `description` is blank after trimming.
    pub fn submit_idea(&mut self, title: &str, description: &str, tags_raw: &str) -> Mutation {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            return Mutation::Unchanged;
        }

        let idea = Idea {
            id: IdeaId::generate(),
            title: title.to_string(),
            description: description.to_string(),
            tags: parse_tags(tags_raw),
            votes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
            author: self.author.clone(),
        };
        log::debug!("idea {} submitted with {} tags", idea.id, idea.tags.len());
        self.ideas.insert(0, idea);
        self.persist_ideas();
        Mutation::Applied
    }

    /// Adds `delta` to the idea's votes, clamping at zero.
    pub fn vote(&mut self, id: &IdeaId, delta: i32) -> Mutation {
        let Some(idea) = self.ideas.iter_mut().find(|idea| &idea.id == id) else {
            return Mutation::Unchanged;
        };
        let next = i64::from(idea.votes) + i64::from(delta);
        idea.votes = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        log::debug!("idea {id} now has {} votes", idea.votes);
        self.persist_ideas();
        Mutation::Applied
    }

    /// Appends a comment. Unchanged for blank text or an unknown idea.
    pub fn add_comment(&mut self, id: &IdeaId, text: &str) -> Mutation {
        let text = text.trim();
        if text.is_empty() {
            return Mutation::Unchanged;
        }
        let Some(idea) = self.ideas.iter_mut().find(|idea| &idea.id == id) else {
            return Mutation::Unchanged;
        };
        idea.comments.push(Comment {
            id: CommentId::generate(),
            text: text.to_string(),
            created_at: Utc::now(),
            author: self.author.clone(),
        });
        log::debug!("comment added to idea {id}");
        self.persist_ideas();
        Mutation::Applied
    }

    pub fn remove_comment(&mut self, id: &IdeaId, comment_id: &CommentId) -> Mutation {
        let Some(idea) = self.ideas.iter_mut().find(|idea| &idea.id == id) else {
            return Mutation::Unchanged;
        };
        let before = idea.comments.len();
        idea.comments.retain(|comment| &comment.id != comment_id);
        if idea.comments.len() == before {
            return Mutation::Unchanged;
        }
        log::debug!("comment {comment_id} removed from idea {id}");
        self.persist_ideas();
        Mutation::Applied
    }

    // ── Saved ids / theme ────────────────────────────────────────────────────

    /// Removes `id` from the saved list if present, otherwise prepends it.
    ///
    /// The id is not checked against the idea collection.
    pub fn toggle_save(&mut self, id: &IdeaId) -> Mutation {
        if let Some(pos) = self.saved.iter().position(|saved| saved == id) {
            self.saved.remove(pos);
        } else {
            self.saved.insert(0, id.clone());
        }
        if let Err(err) = persist::write_saved(&self.kv, &self.saved) {
            log::warn!("{err}");
        }
        Mutation::Applied
    }

    pub fn toggle_theme(&mut self) -> Mutation {
        self.theme = self.theme.toggled();
        log::debug!("theme switched to {}", self.theme.as_str());
        if let Err(err) = persist::write_theme(&self.kv, self.theme) {
            log::warn!("{err}");
        }
        Mutation::Applied
    }

    // ── Form state ───────────────────────────────────────────────────────────

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_draft_tags(&mut self, tags: impl Into<String>) {
        self.draft.tags = tags.into();
    }

    /// Submits the draft; the draft is cleared only if an idea was created.
    pub fn submit_draft(&mut self) -> Mutation {
        let draft = std::mem::take(&mut self.draft);
        let outcome = self.submit_idea(&draft.title, &draft.description, &draft.tags);
        if !outcome.is_applied() {
            self.draft = draft;
        }
        outcome
    }

    // ── Filter state ─────────────────────────────────────────────────────────

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_tag_filter(&mut self, tag: impl Into<String>) {
        self.filters.tag = tag.into();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.filters.sort = sort;
    }

    pub fn clear_filters(&mut self) {
        self.filters = ViewQuery::default();
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn persist_ideas(&self) {
        if let Err(err) = persist::write_ideas(&self.kv, &self.ideas) {
            log::warn!("{err}");
        }
    }
}

fn degraded<T>(err: BoardError) -> Option<T> {
    log::warn!("{err}; using default");
    None
}

impl<K: KeyValueStore> std::fmt::Debug for IdeaStore<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeaStore")
            .field("ideas", &self.ideas.len())
            .field("saved", &self.saved.len())
            .field("theme", &self.theme)
            .field("author", &self.author)
            .finish_non_exhaustive()
    }
}

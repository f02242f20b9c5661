//! User intents emitted by a presentation layer.
//!
//! A front end that prefers message passing over method calls can funnel
//! every button and form through [`IdeaStore::dispatch`].

use crate::models::{CommentId, IdeaId};
use crate::store::{IdeaStore, Mutation};
use crate::traits::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitIdea {
        title: String,
        description: String,
        tags: String,
    },
    /// Submit whatever is currently in the form.
    SubmitDraft,
    Upvote(IdeaId),
    Downvote(IdeaId),
    AddComment {
        idea: IdeaId,
        text: String,
    },
    RemoveComment {
        idea: IdeaId,
        comment: CommentId,
    },
    ToggleSave(IdeaId),
    ToggleTheme,
}

impl<K: KeyValueStore> IdeaStore<K> {
    pub fn dispatch(&mut self, intent: Intent) -> Mutation {
        match intent {
            Intent::SubmitIdea {
                title,
                description,
                tags,
            } => self.submit_idea(&title, &description, &tags),
            Intent::SubmitDraft => self.submit_draft(),
            Intent::Upvote(id) => self.vote(&id, 1),
            Intent::Downvote(id) => self.vote(&id, -1),
            Intent::AddComment { idea, text } => self.add_comment(&idea, &text),
            Intent::RemoveComment { idea, comment } => self.remove_comment(&idea, &comment),
            Intent::ToggleSave(id) => self.toggle_save(&id),
            Intent::ToggleTheme => self.toggle_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::traits::MockKeyValueStore;

    fn store() -> IdeaStore<MockKeyValueStore> {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set().returning(|_, _| Ok(()));
        IdeaStore::load(kv)
    }

    #[test]
    fn intents_drive_the_store() {
        let mut store = store();
        let outcome = store.dispatch(Intent::SubmitIdea {
            title: "Voice notes".into(),
            description: "Record an idea instead of typing it".into(),
            tags: "Audio".into(),
        });
        assert!(outcome.is_applied());
        let id = store.ideas()[0].id.clone();

        let _ = store.dispatch(Intent::Upvote(id.clone()));
        let _ = store.dispatch(Intent::Upvote(id.clone()));
        let _ = store.dispatch(Intent::Downvote(id.clone()));
        assert_eq!(store.idea(&id).unwrap().votes, 1);

        let _ = store.dispatch(Intent::AddComment {
            idea: id.clone(),
            text: "yes please".into(),
        });
        let comment = store.idea(&id).unwrap().comments[0].id.clone();
        let outcome = store.dispatch(Intent::RemoveComment {
            idea: id.clone(),
            comment,
        });
        assert!(outcome.is_applied());
        assert!(store.idea(&id).unwrap().comments.is_empty());

        let _ = store.dispatch(Intent::ToggleSave(id.clone()));
        assert!(store.is_saved(&id));

        let _ = store.dispatch(Intent::ToggleTheme);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn submit_draft_intent_uses_form_state() {
        let mut store = store();
        assert_eq!(store.dispatch(Intent::SubmitDraft), Mutation::Unchanged);

        store.set_draft_title("Tag colours");
        store.set_draft_description("Let each tag pick a colour");
        assert_eq!(store.dispatch(Intent::SubmitDraft), Mutation::Applied);
        assert_eq!(store.ideas()[0].title, "Tag colours");
    }
}

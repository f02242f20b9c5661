//! ib-core
//!
//! The central domain logic and interface definitions for the idea board:
//! models, the persistence port, the state store and the derived view.

pub mod error;
pub mod intent;
pub mod models;
pub mod persist;
pub mod seed;
pub mod store;
pub mod traits;
pub mod view;

// Re-exporting for easier access in other crates
pub use error::*;
pub use intent::Intent;
pub use models::*;
pub use store::{IdeaStore, Mutation};
pub use traits::*;
pub use view::{compute_view, distinct_tags, BoardView};

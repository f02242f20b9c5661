//! # idea-board
//!
//! Assembles a ready-to-use board from configuration and compile-time
//! features. Host applications (the presentation layer) call
//! [`open_default`] once and then drive the returned [`Board`].

use anyhow::Context;
use ib_core::traits::KeyValueStore;

pub use ib_config::{Backend, BoardConfig};
pub use ib_core::{
    BoardView, Comment, CommentId, Idea, IdeaId, IdeaStore, Intent, Mutation, SortMode, Theme,
    ViewQuery,
};

// Feature-gated imports: only the enabled backends are compiled in
#[cfg(feature = "kv-file")]
use ib_kv_file::FileKvStore;

#[cfg(feature = "kv-memory")]
use ib_kv_memory::MemoryKvStore;

/// A board backed by whichever plugin the configuration selected.
pub type Board = IdeaStore<Box<dyn KeyValueStore>>;

/// Installs `env_logger`, defaulting to the configured filter when `RUST_LOG`
/// is unset. Later calls are no-ops.
pub fn init_logging(cfg: &BoardConfig) {
    let env = env_logger::Env::new().default_filter_or(cfg.log_level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

/// Loads configuration, installs logging and opens the board.
pub fn open_default() -> anyhow::Result<Board> {
    let cfg = BoardConfig::load().context("loading board configuration")?;
    init_logging(&cfg);
    open_board(&cfg)
}

pub fn open_board(cfg: &BoardConfig) -> anyhow::Result<Board> {
    let kv = open_backend(cfg)?;
    let board = IdeaStore::load(kv).with_author(cfg.author.clone());
    log::info!(
        "idea board ready ({:?} backend, origin {}, {} ideas)",
        cfg.backend,
        cfg.origin,
        board.ideas().len()
    );
    Ok(board)
}

fn open_backend(cfg: &BoardConfig) -> anyhow::Result<Box<dyn KeyValueStore>> {
    match cfg.backend {
        #[cfg(feature = "kv-file")]
        Backend::File => {
            let path = cfg.storage_path();
            let store = FileKvStore::open(&path)
                .with_context(|| format!("opening board storage at {}", path.display()))?;
            Ok(Box::new(store))
        }
        #[cfg(feature = "kv-memory")]
        Backend::Memory => Ok(Box::new(MemoryKvStore::new())),
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("{other:?} backend is not compiled in; enable its cargo feature"),
    }
}

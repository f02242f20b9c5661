//! # ib-config
//!
//! Board configuration, layered lowest to highest:
//! built-in defaults, then `idea-board.toml` (optional), then
//! `IDEA_BOARD_*` environment variables (a `.env` file is honoured).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "idea-board.toml";
pub const ENV_PREFIX: &str = "IDEA_BOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid board configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    #[error("invalid board configuration: {0}")]
    Validation(String),
}

/// Which `KeyValueStore` plugin backs the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    File,
}

impl Backend {
    /// The name accepted in config files and `IDEA_BOARD_BACKEND`.
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::File => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    pub backend: Backend,
    /// Directory holding one document per origin.
    pub data_dir: PathBuf,
    /// Storage scope; two boards with the same origin share state.
    pub origin: String,
    /// Label stamped on locally created ideas and comments.
    pub author: String,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            backend: Backend::File,
            data_dir: PathBuf::from("./data"),
            origin: "local".to_string(),
            author: "You".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Loads `.env`, `idea-board.toml` from the working directory and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::load_layers(Some(Path::new(DEFAULT_CONFIG_FILE)), true)
    }

    /// Loads from an explicit file (which must exist) plus the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Validation(format!(
                "{} does not exist",
                path.display()
            )));
        }
        load_dotenv();
        Self::load_layers(Some(path), true)
    }

    fn load_layers(file: Option<&Path>, with_env: bool) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("backend", defaults.backend.as_str())?
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("origin", defaults.origin)?
            .set_default("author", defaults.author)?
            .set_default("log_level", defaults.log_level)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let origin_ok = !self.origin.is_empty()
            && self
                .origin
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !self.origin.starts_with('.');
        if !origin_ok {
            return Err(ConfigError::Validation(format!(
                "origin {:?} must be a plain file name",
                self.origin
            )));
        }
        if self.author.trim().is_empty() {
            return Err(ConfigError::Validation("author must not be blank".to_string()));
        }
        Ok(())
    }

    /// Document used by the file backend: `<data_dir>/<origin>.json`.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.origin))
    }
}

fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            log::warn!("ignoring .env: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_sources() {
        let cfg = BoardConfig::load_layers(None, false).unwrap();
        assert_eq!(cfg, BoardConfig::default());
        assert_eq!(cfg.storage_path(), PathBuf::from("./data/local.json"));
    }

    #[test]
    fn test_file_layer_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(
            &path,
            "backend = \"memory\"\norigin = \"team-board\"\nauthor = \"Ada\"\n",
        )
        .unwrap();

        let cfg = BoardConfig::load_layers(Some(&path), false).unwrap();
        assert_eq!(cfg.backend, Backend::Memory);
        assert_eq!(cfg.origin, "team-board");
        assert_eq!(cfg.author, "Ada");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_backend_names_round_trip_through_config() {
        for backend in [Backend::Memory, Backend::File] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("board.toml");
            fs::write(&path, format!("backend = \"{}\"\n", backend.as_str())).unwrap();
            let cfg = BoardConfig::load_layers(Some(&path), false).unwrap();
            assert_eq!(cfg.backend, backend);
        }
    }

    #[test]
    fn test_load_from_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "origin = \"from-file\"\n").unwrap();
        let cfg = BoardConfig::load_from(&path).unwrap();
        assert_eq!(cfg.origin, "from-file");
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BoardConfig::load_layers(Some(&dir.path().join("absent.toml")), false).unwrap();
        assert_eq!(cfg.backend, Backend::File);
    }

    #[test]
    fn test_load_from_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_path_like_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(&path, "origin = \"../escape\"\n").unwrap();
        let err = BoardConfig::load_layers(Some(&path), false).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_backend_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(&path, "backend = \"postgres\"\n").unwrap();
        let err = BoardConfig::load_layers(Some(&path), false).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}

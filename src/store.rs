//! One directory of `<code>.json` catalog files.
//!
//! The store owns the load policies: the source catalog must be readable and
//! non-empty, while a target catalog that is missing or malformed loads as an
//! empty tree.

use crate::error::{CodecError, SyncError};
use crate::i18n::LanguageSpec;
use crate::tree::{codec, Tree};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// How a target catalog was found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Loaded,
    Missing,
    /// The file exists but could not be decoded; it loads as `{}`
    Malformed,
}

/// A loaded target catalog and the state it was loaded from.
#[derive(Debug, Clone)]
pub struct TargetCatalog {
    pub tree: Tree,
    pub state: TargetState,
}

#[derive(Debug, Clone)]
pub struct LocaleStore {
    dir: PathBuf,
    source: LanguageSpec,
}

impl LocaleStore {
    pub fn new(dir: impl Into<PathBuf>, source: LanguageSpec) -> Self {
        Self {
            dir: dir.into(),
            source,
        }
    }

    pub fn path_for(&self, language: &LanguageSpec) -> PathBuf {
        self.dir.join(language.file_name())
    }

    pub fn source_path(&self) -> PathBuf {
        self.path_for(&self.source)
    }

    pub fn exists(&self, language: &LanguageSpec) -> bool {
        self.path_for(language).is_file()
    }

    /// Load the canonical catalog. Any read or decode failure, and an empty
    /// catalog, is an error.
    pub fn load_source(&self) -> Result<Tree, SyncError> {
        let path = self.source_path();
        let tree = codec::load(&path).map_err(SyncError::SourceUnavailable)?;
        if tree.is_empty() {
            return Err(SyncError::EmptySource { path });
        }
        Ok(tree)
    }

    /// Load a target catalog, treating a missing or malformed file as `{}`.
    pub fn load_target(&self, language: &LanguageSpec) -> Result<TargetCatalog, SyncError> {
        match codec::load(&self.path_for(language)) {
            Ok(tree) => Ok(TargetCatalog {
                tree,
                state: TargetState::Loaded,
            }),
            Err(CodecError::NotFound { .. }) => Ok(TargetCatalog {
                tree: Tree::new(),
                state: TargetState::Missing,
            }),
            Err(error @ CodecError::Malformed { .. }) => {
                warn!(
                    "{}: {}; treating it as empty, every source key will be retranslated",
                    language, error
                );
                Ok(TargetCatalog {
                    tree: Tree::new(),
                    state: TargetState::Malformed,
                })
            }
            Err(error) => Err(SyncError::TargetUnreadable(error)),
        }
    }

    /// Write a target catalog. When it was loaded from a malformed file, the
    /// old content is copied to `<code>.json.corrupt` first.
    pub fn save_target(
        &self,
        language: &LanguageSpec,
        tree: &Tree,
        state: TargetState,
    ) -> Result<(), SyncError> {
        let path = self.path_for(language);

        if state == TargetState::Malformed {
            let backup = self.corrupt_backup_path(language);
            fs::copy(&path, &backup).map_err(|source| {
                SyncError::Save(CodecError::FileAccess {
                    path: backup.clone(),
                    source,
                })
            })?;
            warn!("{}: kept unreadable catalog as {}", language, backup.display());
        }

        codec::save(&path, tree).map_err(SyncError::Save)?;
        info!("{}: saved {}", language, path.display());
        Ok(())
    }

    pub fn corrupt_backup_path(&self, language: &LanguageSpec) -> PathBuf {
        self.dir.join(format!("{}.corrupt", language.file_name()))
    }
}

//! JSON persistence for catalog files.
//!
//! Files are written pretty-printed with two-space indentation and literal
//! non-ASCII characters, in the key order the tree holds, so that
//! `save(load(x))` reproduces a file this codec wrote earlier byte for byte.

use crate::error::CodecError;
use crate::tree::Tree;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parse catalog text. The top level must be a JSON object.
pub fn decode(text: &str) -> Result<Tree, serde_json::Error> {
    serde_json::from_str(text)
}

/// Render a catalog the way it is stored on disk.
pub fn encode(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

/// Read and decode a catalog file.
pub fn load(path: &Path) -> Result<Tree, CodecError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CodecError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CodecError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
    })?;

    decode(&text).map_err(|source| CodecError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode and write a catalog file, replacing any previous content.
///
/// The text is written to a sibling `.tmp` file first and then renamed over
/// the destination, so an interrupted save leaves the old file intact.
pub fn save(path: &Path, tree: &Tree) -> Result<(), CodecError> {
    let text = encode(tree).map_err(|source| CodecError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let access = |source: std::io::Error| CodecError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(access)?;
    }

    let staging = staging_path(path);
    fs::write(&staging, text).map_err(access)?;
    fs::rename(&staging, path).map_err(access)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

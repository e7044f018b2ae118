//! Symbol store lookups.
//!
//! A symbol store maps raw frame identifiers (e.g. `ntdll.dll!0x7ffe12a0`)
//! to resolved symbol names. It is either a single JSON object file or a
//! directory of such files, merged in file-name order.

use crate::utils::error::ParseError;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct SymbolStore {
    symbols: HashMap<String, String>,
}

impl SymbolStore {
    /// Load a symbol store from a file or a directory of `*.json` files
    ///
    /// A missing path yields an empty store so unresolved names pass through.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(
                "Symbol store {} does not exist, frame names will not be resolved",
                path.display()
            );
            return Ok(Self::default());
        }

        let mut store = Self::default();

        if path.is_dir() {
            for file in symbol_files(path)? {
                store.merge_file(&file)?;
            }
        } else {
            store.merge_file(path)?;
        }

        debug!(
            "Loaded {} symbols from {}",
            store.symbols.len(),
            path.display()
        );

        Ok(store)
    }

    /// Resolve a raw frame name, falling back to the name itself
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.symbols.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn insert(&mut self, raw: impl Into<String>, resolved: impl Into<String>) {
        self.symbols.insert(raw.into(), resolved.into());
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn merge_file(&mut self, file: &Path) -> Result<(), ParseError> {
        let contents = fs::read_to_string(file).map_err(|source| ParseError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&contents)?;
        self.symbols.extend(entries);
        Ok(())
    }
}

/// List `*.json` files in a directory, sorted by file name
fn symbol_files(dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    let io_err = |source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

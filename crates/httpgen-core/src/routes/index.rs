use std::fs;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::extract::RouteExtractor;
use crate::error::IndexError;

/// Key used for the scan root itself.
pub const ROOT_KEY: &str = ".";

/// A directory that owns one or more routes through its declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub routes: Vec<String>,
    pub declaration_file: PathBuf,
    pub directory: PathBuf,
}

/// Directories with at least one declared route, keyed by their
/// `/`-separated path relative to the scan root.
///
/// Built once per run and read-only afterwards. Iteration follows the walk:
/// depth-first, siblings in file-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryIndex {
    entries: IndexMap<String, DirectoryEntry>,
}

impl DirectoryIndex {
    /// Walk `root` and record every directory whose `declaration_file`
    /// yields at least one route.
    ///
    /// Hidden directories are skipped along with their subtrees; nested
    /// directories are visited whether or not their parent matched.
    pub fn scan(
        root: &Path,
        declaration_file: &str,
        extractor: &RouteExtractor,
    ) -> Result<Self, IndexError> {
        let mut entries = IndexMap::new();

        if !root.is_dir() {
            warn!("source directory does not exist: {}", root.display());
            return Ok(Self { entries });
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!("failed to read directory entry: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let declaration = entry.path().join(declaration_file);
            if !declaration.is_file() {
                continue;
            }

            let content = fs::read_to_string(&declaration).map_err(|source| IndexError::Read {
                path: declaration.clone(),
                source,
            })?;
            let routes = extractor.extract(&content);
            let key = relative_key(root, entry.path());

            if routes.is_empty() {
                debug!("{key}: {declaration_file} declares no routes, skipping");
                continue;
            }

            debug!("{key}: {}", routes.join(", "));
            entries.insert(
                key,
                DirectoryEntry {
                    routes,
                    declaration_file: declaration,
                    directory: entry.path().to_path_buf(),
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&DirectoryEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, DirectoryEntry)> for DirectoryIndex {
    fn from_iter<I: IntoIterator<Item = (String, DirectoryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_key(root: &Path, dir: &Path) -> String {
    let parts: Vec<String> = dir
        .strip_prefix(root)
        .unwrap_or(dir)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ROOT_KEY.to_string()
    } else {
        parts.join("/")
    }
}

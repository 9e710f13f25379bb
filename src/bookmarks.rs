//! Bookmark Store Module
//!
//! Persisted set of lead ids, independent of the filter pipeline:
//! - Single JSON slot (tracking/bookmarks.json) holding an id array
//! - Missing or corrupt slots load as an empty set, never an error
//! - Writes go to a temp file and are renamed into place, so a crash
//!   mid-write cannot corrupt previously saved state
//! - Toggle persists the new set before the in-memory state changes

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

pub struct BookmarkStore {
    path: PathBuf,
    ids: HashSet<String>,
}

impl BookmarkStore {
    /// Open the bookmark slot under `root`
    pub fn load(root: &str) -> Result<Self> {
        let path = PathBuf::from(root).join("tracking/bookmarks.json");

        let ids = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read bookmarks from {:?}", path))?;
            serde_json::from_str::<Vec<String>>(&content)
                .map(|ids| ids.into_iter().collect())
                .unwrap_or_default()
        } else {
            HashSet::new()
        };

        Ok(BookmarkStore { path, ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bookmarked ids in sorted order
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Toggle membership for `id`: add if absent, remove if present.
    /// The resulting set is persisted before the in-memory state is
    /// updated; on a write failure both disk and memory are unchanged.
    /// Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let mut next = self.ids.clone();
        let added = if next.remove(id) {
            false
        } else {
            next.insert(id.to_string());
            true
        };

        self.persist(&next)?;
        self.ids = next;
        Ok(added)
    }

    /// Overwrite the slot with the full set, write-then-rename
    fn persist(&self, ids: &HashSet<String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create tracking directory")?;
        }

        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        let json = serde_json::to_string_pretty(&sorted)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write bookmarks to {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace bookmark slot {:?}", self.path))?;

        Ok(())
    }
}

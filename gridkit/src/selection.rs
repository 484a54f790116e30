//! Row selection state.
//!
//! Selection uses string row keys so it stays stable when rows are filtered,
//! sorted or the record set is replaced.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

/// Which rows the select-all control applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectAllScope {
    /// Every loaded row, visible or not.
    #[default]
    AllRows,
    /// Only rows passing the current filter.
    FilteredRows,
}

impl SelectAllScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectAllScope::AllRows => "all",
            SelectAllScope::FilteredRows => "filtered",
        }
    }
}

impl std::fmt::Display for SelectAllScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SelectAllScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all_rows" => Ok(SelectAllScope::AllRows),
            "filtered" | "filtered_rows" => Ok(SelectAllScope::FilteredRows),
            other => Err(format!("unknown select-all scope: {other}")),
        }
    }
}

/// Key-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected keys (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flip membership of a key. Returns the new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        let now = if self.selected.remove(key) {
            false
        } else {
            self.selected.insert(key.to_string());
            true
        };
        debug!("selection toggle {key} -> {now}");
        now
    }

    /// Set membership of a key explicitly.
    pub fn set(&mut self, key: &str, selected: bool) {
        if selected {
            self.selected.insert(key.to_string());
        } else {
            self.selected.remove(key);
        }
    }

    /// Whether every key in `keys` is selected.
    ///
    /// An empty key list is never "all selected".
    pub fn all_selected<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for key in keys {
            any = true;
            if !self.selected.contains(key) {
                return false;
            }
        }
        any
    }

    /// Number of keys in `keys` that are selected.
    pub fn count_in<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        keys.into_iter().filter(|k| self.selected.contains(*k)).count()
    }

    /// Select-all toggle over `keys`.
    ///
    /// If every key is already selected they are all deselected, otherwise
    /// they are all selected. Returns `true` if the keys ended up selected.
    pub fn toggle_all(&mut self, keys: &[String]) -> bool {
        let select = !self.all_selected(keys.iter().map(String::as_str));
        for key in keys {
            self.set(key, select);
        }
        debug!("selection toggle_all over {} rows -> {select}", keys.len());
        select
    }

    /// Drop keys that are not in `keys`.
    /// Returns the keys that were removed.
    pub fn retain(&mut self, keys: &HashSet<String>) -> Vec<String> {
        let removed: Vec<_> = self
            .selected
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        for key in &removed {
            self.selected.remove(key);
        }
        removed
    }
}

/// Footer text: `"X of Y row(s) selected."`.
pub fn selection_summary(selected: usize, filtered: usize) -> String {
    format!("{selected} of {filtered} row(s) selected.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_toggle_flips() {
        let mut sel = Selection::new();
        assert!(sel.toggle("a"));
        assert!(sel.is_selected("a"));
        assert!(!sel.toggle("a"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_from_partial_selects_all() {
        let mut sel = Selection::new();
        sel.toggle("b");
        assert!(sel.toggle_all(&keys(&["a", "b", "c"])));
        assert_eq!(sel.selected(), keys(&["a", "b", "c"]));
        assert!(!sel.toggle_all(&keys(&["a", "b", "c"])));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_leaves_keys_outside_scope() {
        let mut sel = Selection::new();
        sel.toggle("z");
        sel.toggle_all(&keys(&["a"]));
        sel.toggle_all(&keys(&["a"]));
        assert_eq!(sel.selected(), keys(&["z"]));
    }

    #[test]
    fn test_empty_scope_is_not_all_selected() {
        let sel = Selection::new();
        assert!(!sel.all_selected(std::iter::empty()));
    }

    #[test]
    fn test_retain_prunes_missing_rows() {
        let mut sel = Selection::new();
        sel.toggle("a");
        sel.toggle("b");
        let live: HashSet<String> = keys(&["b"]).into_iter().collect();
        assert_eq!(sel.retain(&live), keys(&["a"]));
        assert_eq!(sel.selected(), keys(&["b"]));
    }

    #[test]
    fn test_summary() {
        assert_eq!(selection_summary(0, 0), "0 of 0 row(s) selected.");
    }

    #[test]
    fn test_scope_parses_short_and_long_names() {
        assert_eq!("all".parse::<SelectAllScope>(), Ok(SelectAllScope::AllRows));
        assert_eq!("Filtered_Rows".parse::<SelectAllScope>(), Ok(SelectAllScope::FilteredRows));
        assert!("visible".parse::<SelectAllScope>().is_err());
    }
}

//! Name matching for catalog lookups
use std::collections::HashMap;
use std::fmt;

use tle_common::CatalogEntry;

/// Which pass produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Query equals the canonical name
    Exact,
    /// Uppercased query is contained in the canonical name
    Substring,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Substring => write!(f, "substring"),
        }
    }
}

/// Search for the entry matching `query`
///
/// # Search Priority
/// 1. Exact, case-sensitive match on the canonical name
/// 2. First entry (catalog order) whose name contains the uppercased query
///
/// Only the query is uppercased, never the stored name, so names holding
/// lowercase characters are reachable through the exact pass alone.
///
/// # Returns
/// Index into `entries` of the match, and the pass that found it
pub fn search(
    query: &str,
    entries: &[CatalogEntry],
    index: &HashMap<String, usize>,
) -> Option<(usize, MatchType)> {
    if let Some(idx) = exact_match(query, index) {
        return Some((idx, MatchType::Exact));
    }

    substring_match(query, entries).map(|idx| (idx, MatchType::Substring))
}

/// Exact match against the name index
pub fn exact_match(query: &str, index: &HashMap<String, usize>) -> Option<usize> {
    index.get(query).copied()
}

/// Substring match: first entry whose name contains `query.to_uppercase()`
pub fn substring_match(query: &str, entries: &[CatalogEntry]) -> Option<usize> {
    let needle = query.to_uppercase();
    entries.iter().position(|entry| entry.name.contains(&needle))
}

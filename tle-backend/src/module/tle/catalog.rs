//! Immutable TLE catalog
use std::collections::HashMap;

use thiserror::Error;
use tle_common::CatalogEntry;

use super::search::{self, MatchType};
use super::seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry has an empty name")]
    EmptyName,
    #[error("duplicate catalog entry: {0}")]
    DuplicateName(String),
}

/// Result of a successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMatch<'a> {
    pub entry: &'a CatalogEntry,
    pub match_type: MatchType,
}

/// Ordered satellite catalog
///
/// Built once and never mutated afterwards, so it can be shared across
/// request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, keeping `entries` in the given order
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if index.insert(entry.name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Catalog holding the built-in satellite table
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(seed::builtin_entries())
    }

    /// Find the entry for a user-supplied name
    ///
    /// Exact match first, then the first entry containing the uppercased
    /// query. `None` is the ordinary not-found outcome.
    pub fn lookup(&self, query: &str) -> Option<CatalogMatch<'_>> {
        search::search(query, &self.entries, &self.index).map(|(idx, match_type)| CatalogMatch {
            entry: &self.entries[idx],
            match_type,
        })
    }

    /// Exact-name access, no fallback
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        search::exact_match(name, &self.index).map(|idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tle_common::SatelliteDetails;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            line1: String::new(),
            line2: String::new(),
            details: SatelliteDetails::new("", "", ""),
        }
    }

    fn lookup_name(catalog: &Catalog, query: &str) -> Option<String> {
        catalog.lookup(query).map(|m| m.entry.name.clone())
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_every_name_finds_itself() {
        let catalog = Catalog::builtin().unwrap();
        for name in catalog.names() {
            let found = catalog.lookup(&name).unwrap();
            assert_eq!(found.entry.name, name);
            assert_eq!(found.match_type, MatchType::Exact);
        }
    }

    #[test]
    fn test_iss_exact() {
        let catalog = Catalog::builtin().unwrap();
        let found = catalog.lookup("ISS (ZARYA)").unwrap();
        assert_eq!(found.entry.name, "ISS (ZARYA)");
        assert!(found.entry.line1.starts_with("1 25544U"));
        assert_eq!(found.entry.details.kind, "Space Station");
    }

    #[test]
    fn test_eos_substring() {
        let catalog = Catalog::builtin().unwrap();
        let found = catalog.lookup("EOS").unwrap();
        assert_eq!(found.entry.name, "EOS-04");
        assert_eq!(found.match_type, MatchType::Substring);
    }

    #[test]
    fn test_not_found() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("nonexistent-sat").is_none());
    }

    #[test]
    fn test_lowercase_reaches_uppercase_name_by_substring() {
        let catalog = Catalog::builtin().unwrap();
        // Exact pass fails on case, substring pass succeeds after uppercasing
        assert!(catalog.get("cartosat-3").is_none());
        let found = catalog.lookup("cartosat-3").unwrap();
        assert_eq!(found.entry.name, "CARTOSAT-3");
        assert_eq!(found.match_type, MatchType::Substring);
    }

    #[test]
    fn test_hubble_lowercase() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(lookup_name(&catalog, "hubble").as_deref(), Some("HUBBLE ST"));
    }

    #[test]
    fn test_every_substring_of_builtin_names() {
        let catalog = Catalog::builtin().unwrap();
        for name in catalog.names() {
            let chars: Vec<char> = name.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let sub: String = chars[start..end].iter().collect::<String>().to_lowercase();
                    let found = lookup_name(&catalog, &sub).unwrap();
                    // Earlier entries may also contain the fragment
                    let first = catalog
                        .names()
                        .into_iter()
                        .find(|n| n.contains(&sub.to_uppercase()))
                        .unwrap();
                    assert_eq!(found, first, "query {:?}", sub);
                }
            }
        }
    }

    #[test]
    fn test_tie_break_by_insertion_order() {
        let catalog = Catalog::builtin().unwrap();
        // "CARTOSAT-3" and "LANDSAT 8" both contain "SAT"
        assert_eq!(lookup_name(&catalog, "sat").as_deref(), Some("CARTOSAT-3"));
        // "ISS (ZARYA)" and "HUBBLE ST" both contain "S"
        assert_eq!(lookup_name(&catalog, "s").as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        for query in ["EOS", "hubble", "nonexistent-sat", "TIANGONG"] {
            let first = catalog.lookup(query).map(|m| m.entry.clone());
            let second = catalog.lookup(query).map(|m| m.entry.clone());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_mixed_case_name_quirk() {
        // Known quirk: stored names are never uppercased, so a mixed-case
        // name only answers to its exact spelling.
        let catalog = Catalog::new(vec![entry("Starlink-1007"), entry("AQUA")]).unwrap();
        assert_eq!(lookup_name(&catalog, "Starlink-1007").as_deref(), Some("Starlink-1007"));
        assert_eq!(lookup_name(&catalog, "starlink"), None);
        assert_eq!(lookup_name(&catalog, "Starlink"), None);
        assert_eq!(lookup_name(&catalog, "aqua").as_deref(), Some("AQUA"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Catalog::new(vec![entry("AQUA"), entry("TERRA"), entry("AQUA")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("AQUA".to_string()));
        assert_eq!(err.to_string(), "duplicate catalog entry: AQUA");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Catalog::new(vec![entry("")]).unwrap_err(), CatalogError::EmptyName);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("").is_none());
    }
}

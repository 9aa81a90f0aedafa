//! Satellite TLE catalog
//!
//! An ordered, read-only table of two-line element sets keyed by canonical
//! satellite name, plus the two-pass lookup used by the HTTP surface.
//!
//! ## Main Components
//! - `Catalog`: immutable entry table with an exact-name index
//! - `search`: exact and substring matching passes
//! - `seed`: the built-in entries loaded at startup

mod catalog;
pub use catalog::{Catalog, CatalogError, CatalogMatch};

pub mod search;
pub use search::MatchType;

mod seed;

use serde::{Deserialize, Serialize};

/// Message carried by the not-found payload
pub const NOT_FOUND_MESSAGE: &str = "Satellite not found";

/// Descriptive metadata attached to a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub owner: String,
    pub launch: String,
}

impl SatelliteDetails {
    pub fn new(kind: impl Into<String>, owner: impl Into<String>, launch: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            owner: owner.into(),
            launch: launch.into(),
        }
    }
}

/// One satellite in the catalog
///
/// `line1` and `line2` are the two-line element set, stored and returned
/// verbatim. Nothing here parses or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub line1: String,
    pub line2: String,
    pub details: SatelliteDetails,
}

/// Error payload, e.g. `{"error": "Satellite not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        Self {
            error: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Body of `GET /api/tle/{sat_name}`
///
/// Untagged so both variants serialize to the flat objects clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Found(CatalogEntry),
    NotFound(ErrorBody),
}

impl LookupResponse {
    pub fn not_found() -> Self {
        LookupResponse::NotFound(ErrorBody::not_found())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResponse::Found(_))
    }
}

impl From<Option<CatalogEntry>> for LookupResponse {
    fn from(entry: Option<CatalogEntry>) -> Self {
        match entry {
            Some(entry) => LookupResponse::Found(entry),
            None => LookupResponse::not_found(),
        }
    }
}

/// Body of `GET /api/satellites`: canonical names in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteListResponse {
    pub satellites: Vec<String>,
}

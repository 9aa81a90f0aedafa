//! Wire types shared between the TLE backend and its clients.

pub mod types;

pub use types::{
    CatalogEntry, ErrorBody, LookupResponse, SatelliteDetails, SatelliteListResponse,
    NOT_FOUND_MESSAGE,
};

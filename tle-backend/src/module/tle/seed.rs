//! Built-in catalog table
use tle_common::{CatalogEntry, SatelliteDetails};

/// (name, line1, line2, type, owner, launch)
type SeedRow = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

// Element sets as of early 2024. Order is significant for substring matching.
const SEED: &[SeedRow] = &[
    (
        "ISS (ZARYA)",
        "1 25544U 98067A   24032.54415809  .00016717  00000+0  30616-3 0  9993",
        "2 25544  51.6416  57.8136 0004977 341.6433 130.6403 15.49842609437637",
        "Space Station",
        "International",
        "1998",
    ),
    (
        "CARTOSAT-3",
        "1 44793U 19081A   24032.19326499  .00000213  00000+0  10332-4 0  9991",
        "2 44793  97.4154 262.4282 0001369  84.3218 275.8291 15.19973238217350",
        "Earth Observation",
        "ISRO (India)",
        "2019",
    ),
    (
        "EOS-04",
        "1 51656U 22013A   24031.48291234  .00000521  00000+0  38219-4 0  9998",
        "2 51656  97.9182 143.2182 0001567  98.1234 262.1123 14.82193218231201",
        "Radar Imaging",
        "ISRO (India)",
        "2022",
    ),
    (
        "HUBBLE ST",
        "1 20580U 90037B   24032.38291823  .00001231  00000+0  10000-3 0  9995",
        "2 20580  28.4698 322.1823 0002341  98.1234 182.4321 15.09218321932183",
        "Telescope",
        "NASA/ESA",
        "1990",
    ),
    (
        "LANDSAT 8",
        "1 39084U 13008A   24032.12391283  .00000123  00000+0  10231-4 0  9991",
        "2 39084  98.2123 123.1231 0001231  89.1231 270.1231 14.57123912391231",
        "Earth Observation",
        "NASA/USGS",
        "2013",
    ),
    (
        "TIANGONG",
        "1 48274U 21035A   24032.58291234  .00023121  00000+0  10000-3 0  9999",
        "2 48274  41.4698 123.1823 0005431  98.1234 182.4321 15.49218321932183",
        "Space Station",
        "China",
        "2021",
    ),
];

/// Entries of the built-in catalog, in catalog order
pub fn builtin_entries() -> Vec<CatalogEntry> {
    SEED.iter()
        .map(|&(name, line1, line2, kind, owner, launch)| CatalogEntry {
            name: name.to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
            details: SatelliteDetails::new(kind, owner, launch),
        })
        .collect()
}

// crates/usgeo-core/src/convert.rs

//! Conversion from parsed [`Record`]s into the typed tables.
//!
//! Field names follow the documented source headers. Numeric fields that
//! fail to parse become `None` rather than aborting the load; state codes
//! are normalized to uppercase so query-time comparisons stay cheap.

use crate::model::{BasicCity, City, County, State};
use crate::record::Record;
use crate::traits::GeoBackend;

/// Parses a string into an `Option<f64>`.
///
/// \- Trims leading and trailing whitespace before parsing.
/// \- Returns `None` for empty input or when parsing fails.
pub fn parse_opt_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

pub(crate) fn parse_opt_u32(s: &str) -> Option<u32> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<u32>().ok()
}

/// Normalize a state code: trimmed, uppercase ASCII.
pub(crate) fn norm_code(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// Split the comma-separated ZIP sub-list, dropping empty entries.
pub(crate) fn split_zips<B: GeoBackend>(s: &str) -> Vec<B::Str> {
    s.split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(B::str_from)
        .collect()
}

/// Build the extended city table.
///
/// Header: `City | State short | State full | County | Latitude |
/// Longitude | ZIP codes | Population | Density | Timezone`.
pub fn build_cities<B: GeoBackend>(records: &[Record]) -> Vec<City<B>> {
    records
        .iter()
        .map(|r| {
            let timezone = r.get("Timezone").trim();
            City {
                name: B::str_from(r.get("City")),
                state_code: B::str_from(&norm_code(r.get("State short"))),
                state_name: B::str_from(r.get("State full")),
                county_name: B::str_from(r.get("County")),
                zips: split_zips::<B>(r.get("ZIP codes")),
                lat: parse_opt_f64(r.get("Latitude")).map(B::float_from),
                lng: parse_opt_f64(r.get("Longitude")).map(B::float_from),
                population: parse_opt_u32(r.get("Population")),
                density: parse_opt_f64(r.get("Density")).map(B::float_from),
                timezone: (!timezone.is_empty()).then(|| B::str_from(timezone)),
            }
        })
        .collect()
}

/// Build the basic city table.
///
/// Header: `City | State short | State full | County | City alias`.
pub fn build_basic_cities<B: GeoBackend>(records: &[Record]) -> Vec<BasicCity<B>> {
    records
        .iter()
        .map(|r| {
            let alias = r.get("City alias").trim();
            BasicCity {
                name: B::str_from(r.get("City")),
                state_code: B::str_from(&norm_code(r.get("State short"))),
                state_name: B::str_from(r.get("State full")),
                county_name: B::str_from(r.get("County")),
                alias: (!alias.is_empty()).then(|| B::str_from(alias)),
            }
        })
        .collect()
}

/// Build the state table. Header: `state_id | state_name`.
pub fn build_states<B: GeoBackend>(records: &[Record]) -> Vec<State<B>> {
    records
        .iter()
        .map(|r| State {
            code: B::str_from(&norm_code(r.get("state_id"))),
            name: B::str_from(r.get("state_name")),
        })
        .collect()
}

/// Build the county table. Header: `state_id | state_name | county_name`.
pub fn build_counties<B: GeoBackend>(records: &[Record]) -> Vec<County<B>> {
    records
        .iter()
        .map(|r| County {
            state_code: B::str_from(&norm_code(r.get("state_id"))),
            state_name: B::str_from(r.get("state_name")),
            name: B::str_from(r.get("county_name")),
        })
        .collect()
}

// crates/usgeo-core/src/loader/json.rs

//! Loader for the original JSON source shape.
//!
//! The dataset was originally distributed as three JSON arrays
//! (`cities.json`, `states.json`, `counties.json`) whose fields are all
//! strings. This module parses that shape and converts it into the domain
//! model. The JSON source carries no basic-schema city table, so
//! [`GeoDb::load_json_dir`] leaves `basic_cities` empty.

use super::read_text;
use crate::convert::{norm_code, parse_opt_f64, parse_opt_u32, split_zips};
use crate::error::Result;
use crate::model::{City, County, GeoDb, State};
use crate::traits::GeoBackend;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Raw city structure as it comes from JSON. Every field is a string in
/// the source; `zips` is a comma-separated sub-list.
#[derive(Debug, Deserialize)]
pub struct CityJson {
    pub city_ascii: String,
    pub state_id: String,
    pub state_name: String,
    #[serde(default)]
    pub county_name: String,
    #[serde(default)]
    pub zips: String,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub density: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Raw state structure from JSON.
#[derive(Debug, Deserialize)]
pub struct StateJson {
    pub state_id: String,
    pub state_name: String,
}

/// Raw county structure from JSON.
#[derive(Debug, Deserialize)]
pub struct CountyJson {
    pub state_id: String,
    pub state_name: String,
    pub county_name: String,
}

fn city_from_json<B: GeoBackend>(raw: &CityJson) -> City<B> {
    City {
        name: B::str_from(&raw.city_ascii),
        state_code: B::str_from(&norm_code(&raw.state_id)),
        state_name: B::str_from(&raw.state_name),
        county_name: B::str_from(&raw.county_name),
        zips: split_zips::<B>(&raw.zips),
        lat: raw
            .lat
            .as_deref()
            .and_then(parse_opt_f64)
            .map(B::float_from),
        lng: raw
            .lng
            .as_deref()
            .and_then(parse_opt_f64)
            .map(B::float_from),
        population: raw.population.as_deref().and_then(parse_opt_u32),
        density: raw
            .density
            .as_deref()
            .and_then(parse_opt_f64)
            .map(B::float_from),
        timezone: raw
            .timezone
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(B::str_from),
    }
}

impl<B: GeoBackend> GeoDb<B> {
    /// Load from a directory containing the original JSON source files
    /// (`cities.json`, `states.json`, `counties.json`, optionally
    /// gzipped under the `compact` feature).
    pub fn load_json_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let cities: Vec<CityJson> = read_json(&dir.join("cities.json"))?;
        let states: Vec<StateJson> = read_json(&dir.join("states.json"))?;
        let counties: Vec<CountyJson> = read_json(&dir.join("counties.json"))?;

        Ok(GeoDb::from_tables(
            cities.iter().map(city_from_json::<B>).collect(),
            Vec::new(),
            states
                .iter()
                .map(|s| State {
                    code: B::str_from(&norm_code(&s.state_id)),
                    name: B::str_from(&s.state_name),
                })
                .collect(),
            counties
                .iter()
                .map(|c| County {
                    state_code: B::str_from(&norm_code(&c.state_id)),
                    state_name: B::str_from(&c.state_name),
                    name: B::str_from(&c.county_name),
                })
                .collect(),
        ))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultBackend;

    #[test]
    fn city_json_converts_with_lenient_numerics() {
        let raw: CityJson = serde_json::from_str(
            r#"{
                "city_ascii": "Troy",
                "state_id": "ny",
                "state_name": "New York",
                "county_name": "Rensselaer",
                "zips": "12180,12182",
                "lat": "42.7284",
                "lng": "-73.6918",
                "population": "49374",
                "density": "",
                "timezone": "America/New_York"
            }"#,
        )
        .unwrap();

        let city = city_from_json::<DefaultBackend>(&raw);
        assert_eq!(city.name(), "Troy");
        assert_eq!(city.state_code(), "NY");
        assert!(city.has_zip("12180"));
        assert_eq!(city.coords(), Some((42.7284, -73.6918)));
        assert_eq!(city.population(), Some(49374));
        assert_eq!(city.density(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw: CityJson = serde_json::from_str(
            r#"{"city_ascii": "Nowhere", "state_id": "NV", "state_name": "Nevada"}"#,
        )
        .unwrap();
        let city = city_from_json::<DefaultBackend>(&raw);
        assert_eq!(city.county_name(), "");
        assert!(city.zips().is_empty());
        assert_eq!(city.coords(), None);
    }
}

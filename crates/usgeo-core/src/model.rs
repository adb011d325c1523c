// crates/usgeo-core/src/model.rs
use crate::traits::{DefaultBackend, GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// A city in the extended schema.
///
/// This is an owned data node inside a [`GeoDb`]. String data is reached
/// via accessor methods that return `&str` views regardless of the backend.
/// Numeric fields that failed to parse in the source load as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct City<B: GeoBackend> {
    pub name: B::Str,
    pub state_code: B::Str, // e.g. "CA", always uppercase
    pub state_name: B::Str,
    pub county_name: B::Str,
    /// ZIP codes served by this city, in source order. May be empty.
    pub zips: Vec<B::Str>,
    pub lat: Option<B::Float>,
    pub lng: Option<B::Float>,
    pub population: Option<u32>,
    pub density: Option<B::Float>,
    pub timezone: Option<B::Str>,
}

/// A city in the basic schema: no coordinates, ZIPs, or demographics, but
/// an optional alias (e.g. "NYC" for New York).
///
/// The basic and extended schemas coexist as distinct tables; they are not
/// reconciled into one record type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BasicCity<B: GeoBackend> {
    pub name: B::Str,
    pub state_code: B::Str,
    pub state_name: B::Str,
    pub county_name: B::Str,
    pub alias: Option<B::Str>,
}

/// A U.S. state or territory. Exactly one record per state; `code` is
/// unique within the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct State<B: GeoBackend> {
    pub code: B::Str, // e.g. "NY"
    pub name: B::Str, // e.g. "New York"
}

/// A county within a state. Multiple counties share a `state_code`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct County<B: GeoBackend> {
    pub state_code: B::Str,
    pub state_name: B::Str,
    pub name: B::Str,
}

/// Top-level database structure.
///
/// Holds the four materialized tables and provides the query operations.
/// Tables are never mutated after construction; queries return freshly
/// allocated sequences of shared references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GeoDb<B: GeoBackend> {
    pub cities: Vec<City<B>>,
    pub basic_cities: Vec<BasicCity<B>>,
    pub states: Vec<State<B>>,
    pub counties: Vec<County<B>>,
}

impl<B: GeoBackend> GeoDb<B> {
    /// Assemble a database from already-built tables.
    pub fn from_tables(
        cities: Vec<City<B>>,
        basic_cities: Vec<BasicCity<B>>,
        states: Vec<State<B>>,
        counties: Vec<County<B>>,
    ) -> Self {
        GeoDb {
            cities,
            basic_cities,
            states,
            counties,
        }
    }
}

/// Simple aggregate statistics for the database.
///
/// Returned by [`GeoDb::stats`](crate::GeoDb::stats); the counts reflect
/// the materialized in-memory tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub basic_cities: usize,
    pub states: usize,
    pub counties: usize,
}

/// Convenient alias for the default backend.
pub type DefaultGeoDb = GeoDb<DefaultBackend>;
/// Convenient alias used in the demos.
pub type StandardBackend = DefaultBackend;

impl<B: GeoBackend> City<B> {
    /// City display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Two-letter state code (e.g. "NY"). Always uppercase.
    pub fn state_code(&self) -> &str {
        self.state_code.as_ref()
    }

    /// Full state name (e.g. "New York").
    pub fn state_name(&self) -> &str {
        self.state_name.as_ref()
    }

    /// County this city is associated with.
    pub fn county_name(&self) -> &str {
        self.county_name.as_ref()
    }

    /// ZIP codes served by this city, in source order.
    pub fn zips(&self) -> &[B::Str] {
        &self.zips
    }

    /// True if `zip` appears literally in this city's ZIP list.
    ///
    /// Literal string equality: no partial matches, no numeric
    /// normalization, leading zeros matter.
    pub fn has_zip(&self, zip: &str) -> bool {
        self.zips.iter().any(|z| z.as_ref() == zip)
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat.map(B::float_to_f64)
    }

    pub fn lng(&self) -> Option<f64> {
        self.lng.map(B::float_to_f64)
    }

    /// Coordinate pair, present only when both components parsed.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((B::float_to_f64(lat), B::float_to_f64(lng))),
            _ => None,
        }
    }

    pub fn population(&self) -> Option<u32> {
        self.population
    }

    pub fn density(&self) -> Option<f64> {
        self.density.map(B::float_to_f64)
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_ref().map(|s| s.as_ref())
    }
}

impl<B: GeoBackend> BasicCity<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn state_code(&self) -> &str {
        self.state_code.as_ref()
    }

    pub fn state_name(&self) -> &str {
        self.state_name.as_ref()
    }

    pub fn county_name(&self) -> &str {
        self.county_name.as_ref()
    }

    /// Alternate name, when the source carries one (e.g. "NYC").
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_ref().map(|s| s.as_ref())
    }
}

impl<B: GeoBackend> State<B> {
    /// Two-letter state code (e.g. "CA"). Always uppercase.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    /// State display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl<B: GeoBackend> County<B> {
    pub fn state_code(&self) -> &str {
        self.state_code.as_ref()
    }

    pub fn state_name(&self) -> &str {
        self.state_name.as_ref()
    }

    /// County display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl<B: GeoBackend> NameMatch for City<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: GeoBackend> NameMatch for BasicCity<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: GeoBackend> NameMatch for State<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: GeoBackend> NameMatch for County<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

//! usgeo-rs — workspace facade over `usgeo-core`.
//!
//! The root crate re-exports the core API and hosts the runnable demos
//! (see `demos/`). Depend on `usgeo-core` directly for library use.

pub use usgeo_core::*;

/// usgeo-rs prelude: bring common types and helpers into scope for demos.
pub mod prelude {
    pub use usgeo_core::convert::{
        build_basic_cities, build_cities, build_counties, build_states,
    };
    pub use usgeo_core::{
        equals_folded, fold_key, BasicCity, CachedLoader, City, County, DbStats,
        DefaultBackend, DefaultGeoDb, GeoBackend, GeoDb, GeoError, Loader, NameMatch,
        ParseOptions, Record, RecordSet, Result, StandardBackend, State,
    };
}

// crates/usgeo-core/src/lib.rs

//! # usgeo-core
//!
//! An in-memory, queryable database of United States cities, counties,
//! and states.
//!
//! The crate is built from four pieces:
//! - [`record`]: header-driven parser for the delimited source format
//! - [`loader`]: table materialization (on-demand, memoized, or
//!   pre-serialized binary)
//! - [`query`]: lookup, filter, substring search, ZIP, and proximity
//!   operations on a loaded [`GeoDb`]
//! - [`text`]: the shared case-folding comparison helpers
//!
//! Tables are immutable once loaded. Queries return freshly allocated
//! sequences of shared references and can be issued from multiple threads
//! without synchronization.
//!
//! ```no_run
//! use usgeo_core::DefaultGeoDb;
//!
//! # fn main() -> usgeo_core::Result<()> {
//! let db = DefaultGeoDb::load_dir("data")?;
//! if let Some(city) = db.city("Springfield", "IL") {
//!     println!("{} is in {} County", city.name(), city.county_name());
//! }
//! # Ok(()) }
//! ```

pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod record;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{GeoError, Result};
pub use crate::loader::{CachedLoader, Loader};
// Export the Model Types
pub use crate::model::{
    BasicCity, City, County, DbStats, DefaultGeoDb, GeoDb, StandardBackend, State,
};
pub use crate::record::{ParseOptions, Record, RecordSet};
// Export Text Utils
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch};

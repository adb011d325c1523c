// crates/usgeo-core/src/loader/cache.rs

use super::Loader;
use crate::error::Result;
use crate::model::{BasicCity, City, County, State};
use crate::traits::{DefaultBackend, GeoBackend};
use once_cell::sync::OnceCell;

/// Explicit, caller-owned memoization wrapper around a [`Loader`].
///
/// Each table is parsed at most once, on first access, and held for the
/// lifetime of this value. The cache lives in the wrapper rather than in
/// module or process globals, so load timing and memory use stay explicit
/// and testable: drop the `CachedLoader` and the tables go with it.
pub struct CachedLoader<B: GeoBackend = DefaultBackend> {
    loader: Loader,
    cities: OnceCell<Vec<City<B>>>,
    basic_cities: OnceCell<Vec<BasicCity<B>>>,
    states: OnceCell<Vec<State<B>>>,
    counties: OnceCell<Vec<County<B>>>,
}

impl<B: GeoBackend> CachedLoader<B> {
    pub fn new(loader: Loader) -> Self {
        CachedLoader {
            loader,
            cities: OnceCell::new(),
            basic_cities: OnceCell::new(),
            states: OnceCell::new(),
            counties: OnceCell::new(),
        }
    }

    /// The wrapped loader.
    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Extended-schema city table, parsed on first access.
    pub fn cities(&self) -> Result<&[City<B>]> {
        self.cities
            .get_or_try_init(|| self.loader.load_cities())
            .map(Vec::as_slice)
    }

    /// Basic-schema city table, parsed on first access.
    pub fn basic_cities(&self) -> Result<&[BasicCity<B>]> {
        self.basic_cities
            .get_or_try_init(|| self.loader.load_basic_cities())
            .map(Vec::as_slice)
    }

    /// State table, parsed on first access.
    pub fn states(&self) -> Result<&[State<B>]> {
        self.states
            .get_or_try_init(|| self.loader.load_states())
            .map(Vec::as_slice)
    }

    /// County table, parsed on first access.
    pub fn counties(&self) -> Result<&[County<B>]> {
        self.counties
            .get_or_try_init(|| self.loader.load_counties())
            .map(Vec::as_slice)
    }
}

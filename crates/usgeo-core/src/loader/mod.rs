// crates/usgeo-core/src/loader/mod.rs

//! # Table Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! record parser and the conversion module.
//!
//! Two operating modes:
//! - **on-demand** — a [`Loader`] re-reads and re-parses the backing file
//!   on every call; there is no implicit caching. Callers that query
//!   repeatedly should keep the returned table (or use [`CachedLoader`]).
//! - **pre-serialized** — a binary snapshot produced by
//!   [`GeoDb::to_bytes`]/[`GeoDb::write_binary`] is loaded in one step,
//!   with no parsing cost. See the `binary` functions on [`GeoDb`].

use crate::convert;
use crate::error::{GeoError, Result};
use crate::model::{BasicCity, City, County, GeoDb, State};
use crate::record::{ParseOptions, RecordSet};
use crate::traits::GeoBackend;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod binary;
mod cache;

#[cfg(feature = "json")]
mod json;

pub use cache::CachedLoader;

/// Basic-schema city table file name.
pub const CITIES_FILE: &str = "us_cities.psv";
/// Extended-schema city table file name.
pub const CITIES_EXTENDED_FILE: &str = "us_cities_extended.psv";
/// State table file name.
pub const STATES_FILE: &str = "us_states.psv";
/// County table file name.
pub const COUNTIES_FILE: &str = "us_counties.psv";

/// On-demand loader over a directory of delimited table files.
///
/// Every `load_*` call re-reads the source and re-parses it from scratch.
/// A missing or unreadable file surfaces as
/// [`GeoError::DataUnavailable`]; a table is never silently truncated.
#[derive(Debug, Clone)]
pub struct Loader {
    dir: PathBuf,
    options: ParseOptions,
}

impl Loader {
    /// Loader over `dir` with the default options (`|` delimiter,
    /// lenient parsing).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Loader {
            dir: dir.into(),
            options: ParseOptions::default(),
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Fail fast on rows whose field count does not match the header,
    /// instead of the default lenient fill/discard.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// The directory this loader reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the basic-schema city table.
    pub fn load_basic_cities<B: GeoBackend>(&self) -> Result<Vec<BasicCity<B>>> {
        let set = self.read_table(CITIES_FILE)?;
        Ok(convert::build_basic_cities(set.records()))
    }

    /// Load the extended-schema city table.
    pub fn load_cities<B: GeoBackend>(&self) -> Result<Vec<City<B>>> {
        let set = self.read_table(CITIES_EXTENDED_FILE)?;
        Ok(convert::build_cities(set.records()))
    }

    /// Load the state table.
    pub fn load_states<B: GeoBackend>(&self) -> Result<Vec<State<B>>> {
        let set = self.read_table(STATES_FILE)?;
        Ok(convert::build_states(set.records()))
    }

    /// Load the county table.
    pub fn load_counties<B: GeoBackend>(&self) -> Result<Vec<County<B>>> {
        let set = self.read_table(COUNTIES_FILE)?;
        Ok(convert::build_counties(set.records()))
    }

    /// Load all four tables into a [`GeoDb`].
    pub fn load_db<B: GeoBackend>(&self) -> Result<GeoDb<B>> {
        Ok(GeoDb::from_tables(
            self.load_cities()?,
            self.load_basic_cities()?,
            self.load_states()?,
            self.load_counties()?,
        ))
    }

    fn read_table(&self, name: &str) -> Result<RecordSet> {
        let content = read_text(&self.dir.join(name))?;
        RecordSet::parse_with(&content, &self.options)
    }
}

impl<B: GeoBackend> GeoDb<B> {
    /// Load all four tables from a directory of delimited files.
    ///
    /// Convenience wrapper over [`Loader::load_db`] with default options.
    pub fn load_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        Loader::new(dir).load_db()
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER (DRY)
// -----------------------------------------------------------------------

/// Reads a text source to a string. Tries the plain path first; with the
/// `compact` feature a gzipped sibling (`<name>.gz`) is read
/// transparently. Returns a generic string so callers don't care about
/// the compression.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    match File::open(path) {
        Ok(file) => {
            let mut content = String::new();
            BufReader::new(file).read_to_string(&mut content)?;
            Ok(content)
        }
        Err(e) => {
            #[cfg(feature = "compact")]
            {
                let gz_path = gz_sibling(path);
                if let Ok(file) = File::open(&gz_path) {
                    use flate2::read::GzDecoder;
                    let mut content = String::new();
                    GzDecoder::new(BufReader::new(file)).read_to_string(&mut content)?;
                    return Ok(content);
                }
            }

            Err(GeoError::DataUnavailable(format!(
                "dataset not found at {}: {}",
                path.display(),
                e
            )))
        }
    }
}

#[cfg(feature = "compact")]
fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".gz");
    path.with_file_name(name)
}

// crates/usgeo-core/src/loader/binary.rs

//! Pre-serialized (binary) dataset support.
//!
//! A [`GeoDb`] snapshot serializes to bincode; with the `compact` feature
//! the on-disk form is additionally gzipped. `from_bytes`/`to_bytes`
//! operate on raw bincode and are what an embedding caller pairs with
//! `include_bytes!`; `load_binary`/`write_binary` add the file and
//! compression transport.

use crate::error::{GeoError, Result};
use crate::model::GeoDb;
use crate::traits::GeoBackend;
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// Deserialization cap to prevent malicious data bombs.
const BIN_LIMIT: u64 = 256 * 1024 * 1024;

fn bin_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(BIN_LIMIT)
        .allow_trailing_bytes()
}

impl<B: GeoBackend> GeoDb<B> {
    /// Reconstruct a database from raw bincode bytes.
    ///
    /// This is the static-mode entry point: embed a snapshot with
    /// `include_bytes!` and hand it here once; the resulting tables are
    /// then served with no parsing cost.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(bin_options().deserialize(data)?)
    }

    /// Serialize the database to raw bincode bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bin_options().serialize(self)?)
    }

    /// Load a database from a binary snapshot file.
    ///
    /// With the `compact` feature the file is expected to be gzipped
    /// (the form [`GeoDb::write_binary`] produces).
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Write a binary snapshot file, gzipped under the `compact` feature.
    pub fn write_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;

        #[cfg(feature = "compact")]
        {
            use std::io::Write;
            let file = File::create(path.as_ref())?;
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?;
            Ok(())
        }

        #[cfg(not(feature = "compact"))]
        {
            std::fs::write(path.as_ref(), bytes)?;
            Ok(())
        }
    }
}

/// Opens a file, buffers it, and optionally wraps it in a gzip decoder.
/// Returns a generic reader so the caller doesn't care about the
/// compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::DataUnavailable(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

//! usgeo-cli
//! ==========
//!
//! Command-line interface for the `usgeo-core` United States geographic
//! database.
//!
//! This crate primarily provides a binary (`usgeo-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! usgeo-cli --help
//! usgeo-cli stats
//! usgeo-cli city "Springfield" IL
//! usgeo-cli nearby 34.0522 -118.2437 25
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `usgeo-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.

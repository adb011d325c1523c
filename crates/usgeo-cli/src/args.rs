use clap::{Parser, Subcommand};

/// CLI arguments for usgeo-cli
#[derive(Debug, Parser)]
#[command(
    name = "usgeo",
    version,
    about = "CLI for querying and inspecting the usgeo-core United States geographic database"
)]
pub struct CliArgs {
    /// Path to the directory holding the delimited table files
    /// (default: data)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Fail on malformed rows instead of filling/discarding leniently
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all states
    States,

    /// Lookup a state by two-letter code or by full name
    State {
        /// Two-letter code (e.g. NY) or full name (e.g. "New York")
        query: String,
    },

    /// List all counties for a given state
    Counties {
        /// Two-letter code of the state
        state_code: String,
    },

    /// Search for cities containing a substring
    Cities {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Lookup a city by exact name and state code
    City {
        /// City name (case-insensitive)
        name: String,
        /// Two-letter state code
        state_code: String,
    },

    /// List cities serving a ZIP code
    Zip {
        /// ZIP code (literal match, leading zeros matter)
        zip: String,
    },

    /// List cities within a radius of a coordinate
    Nearby {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lng: f64,
        /// Radius in miles
        radius: f64,
    },
}

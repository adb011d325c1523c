//! Basic usage example for usgeo-rs
//!
//! This example demonstrates how to:
//! - Parse delimited tables into a database
//! - Filter cities and counties by state
//! - Search cities by substring and ZIP code
//! - Run a coarse proximity query
//!
//! It builds a small in-memory dataset from inline text so it runs
//! without an external data directory; swap the parsing block for
//! `DefaultGeoDb::load_dir("data")` to use real files.

use usgeo_rs::prelude::*;

const CITIES: &str = "\
City|State short|State full|County|Latitude|Longitude|ZIP codes|Population|Density|Timezone
Springfield|IL|Illinois|Sangamon|39.7817|-89.6501|62701,62702|114394|1262.9|America/Chicago
Troy|NY|New York|Rensselaer|42.7284|-73.6918|12180,12182|49374|1856.0|America/New_York
Albany|NY|New York|Albany|42.6526|-73.7562|12203,12204|99224|2264.0|America/New_York
Beverly Hills|CA|California|Los Angeles|34.0736|-118.4004|90209,90210|32701|2241.0|America/Los_Angeles
";

const BASIC_CITIES: &str = "\
City|State short|State full|County|City alias
New York|NY|New York|New York|NYC
Los Angeles|CA|California|Los Angeles|LA
";

const STATES: &str = "\
state_id|state_name
IL|Illinois
NY|New York
CA|California
";

const COUNTIES: &str = "\
state_id|state_name|county_name
IL|Illinois|Sangamon
NY|New York|Rensselaer
NY|New York|Albany
CA|California|Los Angeles
";

fn main() -> Result<()> {
    println!("=== usgeo-rs Basic Usage Example ===\n");

    // Build the database from delimited text
    println!("Parsing tables...");
    let db: DefaultGeoDb = GeoDb::from_tables(
        build_cities(RecordSet::parse(CITIES, '|').records()),
        build_basic_cities(RecordSet::parse(BASIC_CITIES, '|').records()),
        build_states(RecordSet::parse(STATES, '|').records()),
        build_counties(RecordSet::parse(COUNTIES, '|').records()),
    );
    let stats = db.stats();
    println!(
        "✓ Loaded {} cities, {} states, {} counties\n",
        stats.cities, stats.states, stats.counties
    );

    // Example 1: List all states
    println!("--- Example 1: List all states ---");
    for state in db.states() {
        println!("- {} ({})", state.name(), state.code());
    }
    println!();

    // Example 2: Cities in a state
    println!("--- Example 2: Cities in New York ---");
    for city in db.cities_by_state("NY") {
        println!("- {} ({} County)", city.name(), city.county_name());
    }
    println!();

    // Example 3: Substring search
    println!("--- Example 3: Search for 'spring' ---");
    for city in db.search_cities("spring") {
        println!("- {}, {}", city.name(), city.state_code());
    }
    println!();

    // Example 4: Exact lookup
    println!("--- Example 4: Exact lookup ---");
    if let Some(city) = db.city("springfield", "il") {
        println!("City: {}", city.name());
        println!("County: {}", city.county_name());
        println!("Population: {:?}", city.population());
        println!("Timezone: {:?}", city.timezone());
    }
    println!();

    // Example 5: ZIP code lookup
    println!("--- Example 5: Who serves 90210? ---");
    for city in db.cities_by_zip("90210") {
        println!("- {}, {}", city.name(), city.state_code());
    }
    println!();

    // Example 6: Proximity filter
    println!("--- Example 6: Cities within 25 miles of Troy, NY ---");
    for city in db.cities_nearby(42.7284, -73.6918, 25.0) {
        println!("- {}, {}", city.name(), city.state_code());
    }
    println!();

    // Example 7: Basic schema with aliases
    println!("--- Example 7: Alias search in the basic table ---");
    for city in db.search_basic_cities("nyc") {
        println!("- {} (alias {:?})", city.name(), city.alias());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

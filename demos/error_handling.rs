//! Error handling example for usgeo-rs
//!
//! This example demonstrates proper error handling and edge cases

use usgeo_rs::prelude::*;

fn main() {
    println!("=== usgeo-rs Error Handling Example ===\n");

    // Example 1: Handling a missing data directory
    println!("--- Example 1: Loading from a missing directory ---");
    let loader = Loader::new("no-such-directory");
    match loader.load_db::<DefaultBackend>() {
        Ok(db) => println!("✓ Database loaded: {} cities", db.stats().cities),
        Err(GeoError::DataUnavailable(msg)) => {
            println!("✗ Data unavailable (expected here): {msg}")
        }
        Err(e) => println!("✗ Unexpected error: {e}"),
    }
    println!();

    // Example 2: Lenient vs strict parsing
    println!("--- Example 2: Lenient vs strict parsing ---");
    let messy = "City|State short|State full\nTroy|NY\n";

    let lenient = RecordSet::parse(messy, '|');
    println!(
        "Lenient: {} record(s), missing field reads as {:?}",
        lenient.len(),
        lenient.records()[0].get("State full")
    );

    let strict = ParseOptions {
        delimiter: '|',
        strict: true,
    };
    match RecordSet::parse_with(messy, &strict) {
        Ok(_) => println!("Strict: accepted"),
        Err(e) => println!("Strict: rejected — {e}"),
    }
    println!();

    // Example 3: Lookup misses are values, not errors
    println!("--- Example 3: Lookup misses ---");
    let db = GeoDb::<DefaultBackend>::from_tables(
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    match db.state("ZZ") {
        Some(state) => println!("Found: {}", state.name()),
        None => println!("state(\"ZZ\") → None (no error)"),
    }
    println!(
        "cities_by_state(\"ZZ\") → {} matches (no error)",
        db.cities_by_state("ZZ").len()
    );

    println!("\n=== Example completed successfully ===");
}

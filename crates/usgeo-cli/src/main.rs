//! usgeo-cli — Command-line interface for usgeo-core
//!
//! This binary provides a simple way to inspect a United States
//! geographic dataset from your terminal. It supports printing basic
//! statistics, listing states and counties, looking up a specific city or
//! state, searching cities by substring or ZIP code, and running a
//! coarse proximity filter.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ usgeo stats
//!
//! - List states / counties
//!   $ usgeo states
//!   $ usgeo counties NY
//!
//! - Lookups
//!   $ usgeo state ny
//!   $ usgeo city "Springfield" IL
//!   $ usgeo zip 90210
//!
//! - Search and proximity
//!   $ usgeo cities spring
//!   $ usgeo nearby 34.0522 -118.2437 25
//!
//! Data source
//! -----------
//!
//! The CLI loads the pipe-delimited table files from the directory given
//! by `--input` (default `data`). Pass `--strict` to reject malformed
//! rows instead of degrading leniently.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use usgeo_core::{DefaultBackend, GeoDb, Loader};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let input_dir = args.input.unwrap_or_else(|| "data".to_string());
    let loader = Loader::new(&input_dir).strict(args.strict);
    let db: GeoDb<DefaultBackend> = loader.load_db()?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Cities (extended): {}", stats.cities);
            println!("  Cities (basic): {}", stats.basic_cities);
            println!("  States: {}", stats.states);
            println!("  Counties: {}", stats.counties);
        }

        Commands::States => {
            for s in db.states() {
                println!("{} ({})", s.name(), s.code());
            }
        }

        Commands::State { query } => {
            match db.state(&query).or_else(|| db.state_by_name(&query)) {
                Some(s) => {
                    println!("State: {}", s.name());
                    println!("Code: {}", s.code());
                    println!("Counties: {}", db.counties_by_state(s.code()).len());
                    println!("Cities: {}", db.cities_by_state(s.code()).len());
                }
                None => {
                    eprintln!("No state found for: {query}");
                }
            }
        }

        Commands::Counties { state_code } => {
            let counties = db.counties_by_state(&state_code);
            if counties.is_empty() {
                eprintln!("No counties found for state: {state_code}");
            } else {
                for c in counties {
                    println!("- {}", c.name());
                }
            }
        }

        Commands::Cities { query } => {
            let matches = db.search_cities(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for city in matches {
                    println!("{} — {}, {}", city.name(), city.county_name(), city.state_code());
                }
            }
        }

        Commands::City { name, state_code } => match db.city(&name, &state_code) {
            Some(city) => {
                println!("City: {}", city.name());
                println!("State: {} ({})", city.state_name(), city.state_code());
                println!("County: {}", city.county_name());
                if let Some((lat, lng)) = city.coords() {
                    println!("Coordinates: {lat}, {lng}");
                }
                if let Some(pop) = city.population() {
                    println!("Population: {pop}");
                }
                if let Some(tz) = city.timezone() {
                    println!("Timezone: {tz}");
                }
                if !city.zips().is_empty() {
                    let zips: Vec<&str> = city.zips().iter().map(|z| z.as_str()).collect();
                    println!("ZIP codes: {}", zips.join(", "));
                }
            }
            None => {
                eprintln!("No city found for: {name}, {state_code}");
            }
        },

        Commands::Zip { zip } => {
            let matches = db.cities_by_zip(&zip);
            if matches.is_empty() {
                println!("No cities serve ZIP: {zip}");
            } else {
                for city in matches {
                    println!("{}, {}", city.name(), city.state_code());
                }
            }
        }

        Commands::Nearby { lat, lng, radius } => {
            let matches = db.cities_nearby(lat, lng, radius);
            if matches.is_empty() {
                println!("No cities within {radius} miles of {lat}, {lng}");
            } else {
                for city in matches {
                    println!("{}, {}", city.name(), city.state_code());
                }
            }
        }
    }

    Ok(())
}

//! Integration tests for the table loaders against the fixture dataset
//! in `tests/data/`.

use usgeo_core::{DefaultBackend, DefaultGeoDb, GeoError, Loader, RecordSet};

fn data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

#[test]
fn load_dir_materializes_all_tables() {
    let db = DefaultGeoDb::load_dir(data_dir()).unwrap();
    let stats = db.stats();
    assert_eq!(stats.cities, 5);
    assert_eq!(stats.basic_cities, 3);
    assert_eq!(stats.states, 3);
    assert_eq!(stats.counties, 5);
}

#[test]
fn on_demand_loads_are_equal_but_independent() {
    let loader = Loader::new(data_dir());
    let first = loader.load_cities::<DefaultBackend>().unwrap();
    let second = loader.load_cities::<DefaultBackend>().unwrap();

    // Element-wise equal...
    assert_eq!(first, second);
    // ...but separate storage: each call re-parses from scratch.
    assert_ne!(first.as_ptr(), second.as_ptr());
}

#[test]
fn missing_source_is_data_unavailable() {
    let loader = Loader::new(data_dir().join("does-not-exist"));
    let err = loader.load_states::<DefaultBackend>().unwrap_err();
    assert!(matches!(err, GeoError::DataUnavailable(_)), "got {err:?}");
}

#[test]
fn strict_loader_accepts_well_formed_fixture() {
    let loader = Loader::new(data_dir()).strict(true);
    let db = loader.load_db::<DefaultBackend>().unwrap();
    assert_eq!(db.stats().cities, 5);
}

#[test]
fn loaded_tables_answer_queries() {
    let db = DefaultGeoDb::load_dir(data_dir()).unwrap();

    assert_eq!(db.state("il").unwrap().name(), "Illinois");
    assert!(db.city("Springfield", "IL").is_some());
    assert_eq!(db.cities_by_zip("90210")[0].name(), "Beverly Hills");
    assert_eq!(
        db.cities_by_state_name("new york"),
        db.cities_by_state("NY")
    );
}

#[test]
fn cached_loader_parses_once_and_serves_slices() {
    let cached = usgeo_core::CachedLoader::<DefaultBackend>::new(Loader::new(data_dir()));
    let first = cached.cities().unwrap();
    let second = cached.cities().unwrap();
    // Same memoized table, same storage.
    assert_eq!(first.as_ptr(), second.as_ptr());
    assert_eq!(first.len(), 5);
    assert_eq!(cached.states().unwrap().len(), 3);
    assert_eq!(cached.basic_cities().unwrap().len(), 3);
    assert_eq!(cached.counties().unwrap().len(), 5);
}

#[test]
fn binary_round_trip_preserves_the_database() {
    let db = DefaultGeoDb::load_dir(data_dir()).unwrap();
    let bytes = db.to_bytes().unwrap();
    let restored = DefaultGeoDb::from_bytes(&bytes).unwrap();
    assert_eq!(db, restored);
}

#[test]
fn binary_file_round_trip() {
    let db = DefaultGeoDb::load_dir(data_dir()).unwrap();
    let path = std::env::temp_dir().join(format!("usgeo-test-{}.bin", std::process::id()));
    db.write_binary(&path).unwrap();
    let restored = DefaultGeoDb::load_binary(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(db, restored);
}

#[test]
fn delimited_round_trip_is_byte_identical() {
    let content = std::fs::read_to_string(data_dir().join("us_states.psv")).unwrap();
    let set = RecordSet::parse(&content, '|');
    assert_eq!(set.to_delimited('|'), content);
}

#[cfg(feature = "json")]
#[test]
fn json_dir_loads_the_original_shape() {
    let db = DefaultGeoDb::load_json_dir(data_dir().join("json")).unwrap();
    assert_eq!(db.stats().cities, 2);
    assert_eq!(db.stats().states, 2);
    // The JSON source has no basic-schema table.
    assert!(db.basic_cities().is_empty());
    assert!(db.city("Troy", "NY").is_some());
}

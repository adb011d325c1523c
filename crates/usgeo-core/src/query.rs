// crates/usgeo-core/src/query.rs

//! Query operations over a loaded [`GeoDb`].
//!
//! All operations are pure reads: they never mutate the tables and return
//! freshly allocated `Vec`s of shared references (or `Option`s for single
//! lookups). Absence is an expected outcome, never an error: unknown
//! codes yield empty results, missing entities yield `None`.

use crate::model::{BasicCity, City, County, DbStats, GeoDb, State};
use crate::text::{equals_folded, fold_key};
use crate::traits::{GeoBackend, NameMatch};

/// Rough miles-per-degree-of-latitude conversion used by
/// [`GeoDb::cities_nearby`]. Valid at mid-latitudes, which is where the
/// dataset lives.
const MILES_PER_DEGREE: f64 = 69.0;

impl<B: GeoBackend> GeoDb<B> {
    /// All cities (extended schema), in source order.
    pub fn cities(&self) -> &[City<B>] {
        &self.cities
    }

    /// All cities (basic schema), in source order.
    pub fn basic_cities(&self) -> &[BasicCity<B>] {
        &self.basic_cities
    }

    /// All states, in source order.
    pub fn states(&self) -> &[State<B>] {
        &self.states
    }

    /// All counties, in source order.
    pub fn counties(&self) -> &[County<B>] {
        &self.counties
    }

    /// Aggregate statistics for the database.
    pub fn stats(&self) -> DbStats {
        DbStats {
            cities: self.cities.len(),
            basic_cities: self.basic_cities.len(),
            states: self.states.len(),
            counties: self.counties.len(),
        }
    }

    /// Cities in the given state, by two-letter code.
    ///
    /// The code comparison is case-insensitive (`"ca"` matches `"CA"`);
    /// relative source order is preserved. Unknown codes yield an empty
    /// result.
    pub fn cities_by_state(&self, state_code: &str) -> Vec<&City<B>> {
        self.cities
            .iter()
            .filter(|c| c.state_code().eq_ignore_ascii_case(state_code))
            .collect()
    }

    /// Cities in the given state, by full state name.
    ///
    /// Case-insensitive exact match on the name (`"new york"` matches
    /// `"New York"`); no trimming beyond the case fold.
    pub fn cities_by_state_name(&self, state_name: &str) -> Vec<&City<B>> {
        self.cities
            .iter()
            .filter(|c| equals_folded(c.state_name(), state_name))
            .collect()
    }

    /// Counties in the given state, by two-letter code.
    pub fn counties_by_state(&self, state_code: &str) -> Vec<&County<B>> {
        self.counties
            .iter()
            .filter(|c| c.state_code().eq_ignore_ascii_case(state_code))
            .collect()
    }

    /// Find all cities whose name contains the given substring,
    /// case-insensitively.
    ///
    /// The empty substring is contained in every name, so
    /// `search_cities("")` returns the entire table. That is documented
    /// behavior, not an input error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use usgeo_core::DefaultGeoDb;
    ///
    /// # fn main() -> usgeo_core::Result<()> {
    /// let db = DefaultGeoDb::load_dir("data")?;
    /// for city in db.search_cities("spring") {
    ///     println!("{}, {}", city.name(), city.state_code());
    /// }
    /// # Ok(()) }
    /// ```
    pub fn search_cities(&self, substr: &str) -> Vec<&City<B>> {
        let q = fold_key(substr);
        self.cities
            .iter()
            .filter(|c| fold_key(c.name()).contains(&q))
            .collect()
    }

    /// Find all basic-schema cities matching the substring on name *or*
    /// alias, case-insensitively.
    pub fn search_basic_cities(&self, substr: &str) -> Vec<&BasicCity<B>> {
        let q = fold_key(substr);
        self.basic_cities
            .iter()
            .filter(|c| {
                fold_key(c.name()).contains(&q)
                    || c.alias().is_some_and(|a| fold_key(a).contains(&q))
            })
            .collect()
    }

    /// Look up a city by exact name and state code.
    ///
    /// The name match is case-insensitive; the state code must match after
    /// uppercasing. Returns the first match in source order, or `None`.
    pub fn city(&self, name: &str, state_code: &str) -> Option<&City<B>> {
        self.cities
            .iter()
            .find(|c| c.state_code().eq_ignore_ascii_case(state_code) && c.is_named(name))
    }

    /// Cities whose ZIP list contains `zip` literally.
    ///
    /// No partial ZIP matches and no numeric normalization; leading
    /// zeros matter.
    pub fn cities_by_zip(&self, zip: &str) -> Vec<&City<B>> {
        self.cities.iter().filter(|c| c.has_zip(zip)).collect()
    }

    /// Cities within `radius_miles` of `(lat, lng)`.
    ///
    /// The radius is converted to degrees by dividing by 69 (rough
    /// miles-per-degree at mid-latitudes) and compared against the
    /// Euclidean distance on a flat lat/lng plane. This is deliberately
    /// not a geodesic calculation: the dataset's use cases are coarse
    /// "nearby" filters, and the approximation is cheap and simple. It
    /// over/under-counts near the poles and across longitudes near the
    /// equator.
    ///
    /// A radius of `0` returns exactly the cities at the queried
    /// coordinates. Cities whose coordinates failed to parse are excluded.
    /// Results are in source order, not sorted by distance.
    pub fn cities_nearby(&self, lat: f64, lng: f64, radius_miles: f64) -> Vec<&City<B>> {
        let radius_deg = radius_miles / MILES_PER_DEGREE;
        self.cities
            .iter()
            .filter(|c| match c.coords() {
                Some((clat, clng)) => {
                    let dlat = clat - lat;
                    let dlng = clng - lng;
                    (dlat * dlat + dlng * dlng).sqrt() <= radius_deg
                }
                None => false,
            })
            .collect()
    }

    /// Look up a state by two-letter code, case-insensitive.
    pub fn state(&self, state_code: &str) -> Option<&State<B>> {
        self.states
            .iter()
            .find(|s| s.code().eq_ignore_ascii_case(state_code))
    }

    /// Look up a state by full name, case-insensitive exact match.
    pub fn state_by_name(&self, state_name: &str) -> Option<&State<B>> {
        self.states.iter().find(|s| s.is_named(state_name))
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{build_basic_cities, build_cities, build_counties, build_states};
    use crate::model::GeoDb;
    use crate::record::RecordSet;
    use crate::traits::DefaultBackend;

    const CITIES: &str = "\
City|State short|State full|County|Latitude|Longitude|ZIP codes|Population|Density|Timezone
Springfield|IL|Illinois|Sangamon|39.7817|-89.6501|62701,62702,62703|114394|1262.9|America/Chicago
Troy|NY|New York|Rensselaer|42.7284|-73.6918|12180,12182|49374|1856.0|America/New_York
Albany|NY|New York|Albany|42.6526|-73.7562|12203,12204|99224|2264.0|America/New_York
Beverly Hills|CA|California|Los Angeles|34.0736|-118.4004|90209,90210|32701|2241.0|America/Los_Angeles
Randsburg|CA|California|Kern|||93554|||America/Los_Angeles
";

    const BASIC_CITIES: &str = "\
City|State short|State full|County|City alias
Springfield|IL|Illinois|Sangamon|
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
CA|California|Kern
";

    fn fixture_db() -> GeoDb<DefaultBackend> {
        GeoDb::from_tables(
            build_cities(RecordSet::parse(CITIES, '|').records()),
            build_basic_cities(RecordSet::parse(BASIC_CITIES, '|').records()),
            build_states(RecordSet::parse(STATES, '|').records()),
            build_counties(RecordSet::parse(COUNTIES, '|').records()),
        )
    }

    #[test]
    fn full_tables_preserve_source_order() {
        let db = fixture_db();
        assert_eq!(db.cities().len(), 5);
        assert_eq!(db.cities()[0].name(), "Springfield");
        assert_eq!(db.states().len(), 3);
        assert_eq!(db.counties().len(), 5);
        let stats = db.stats();
        assert_eq!(stats.cities, 5);
        assert_eq!(stats.basic_cities, 3);
    }

    #[test]
    fn state_lookup_uppercases_input() {
        let db = fixture_db();
        for code in ["ny", "NY", "Ny"] {
            let state = db.state(code).expect("state should resolve");
            assert_eq!(state.code(), "NY");
        }
        assert!(db.state("ZZ").is_none());
        assert!(db.state("").is_none());
    }

    #[test]
    fn state_by_name_is_case_insensitive() {
        let db = fixture_db();
        let state = db.state_by_name("new york").unwrap();
        assert_eq!(state.code(), "NY");
        assert!(db.state_by_name("Atlantis").is_none());
    }

    #[test]
    fn cities_by_state_returns_only_that_state() {
        let db = fixture_db();
        let ny = db.cities_by_state("ny");
        assert_eq!(ny.len(), 2);
        assert!(ny.iter().all(|c| c.state_code() == "NY"));
        // relative order preserved
        assert_eq!(ny[0].name(), "Troy");
        assert_eq!(ny[1].name(), "Albany");
        assert!(db.cities_by_state("ZZ").is_empty());
    }

    #[test]
    fn counties_by_state_filters_on_code() {
        let db = fixture_db();
        let ca = db.counties_by_state("ca");
        assert_eq!(ca.len(), 2);
        assert!(ca.iter().all(|c| c.state_code() == "CA"));
    }

    #[test]
    fn state_name_filter_matches_code_filter() {
        let db = fixture_db();
        let by_name = db.cities_by_state_name("new york");
        let by_code = db.cities_by_state("NY");
        assert_eq!(by_name, by_code);
    }

    #[test]
    fn empty_search_returns_entire_table() {
        let db = fixture_db();
        assert_eq!(db.search_cities("").len(), db.cities().len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let db = fixture_db();
        let lower = db.search_cities("spring");
        let upper = db.search_cities("SPRING");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].name(), "Springfield");
    }

    #[test]
    fn search_matches_substrings_anywhere() {
        let db = fixture_db();
        let hits = db.search_cities("hills");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Beverly Hills");
        assert!(db.search_cities("xyzzy").is_empty());
    }

    #[test]
    fn city_lookup_hit_and_miss() {
        let db = fixture_db();
        let city = db.city("springfield", "il").expect("known fixture city");
        assert_eq!(city.name(), "Springfield");
        assert_eq!(city.state_code(), "IL");

        // name exists, wrong state
        assert!(db.city("Springfield", "NY").is_none());
        assert!(db.city("Gotham", "NY").is_none());
    }

    #[test]
    fn zip_match_is_literal() {
        let db = fixture_db();
        let hits = db.cities_by_zip("90210");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Beverly Hills");
        // no partial matches
        assert!(db.cities_by_zip("9021").is_empty());
        assert!(db.cities_by_zip("902101").is_empty());
    }

    #[test]
    fn zero_radius_matches_exact_coordinates_only() {
        let db = fixture_db();
        let hits = db.cities_nearby(42.7284, -73.6918, 0.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Troy");
        assert!(db.cities_nearby(0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn nearby_includes_cities_within_radius() {
        let db = fixture_db();
        // Troy and Albany are ~7 miles apart; Springfield IL is ~900 miles away.
        let hits = db.cities_nearby(42.7284, -73.6918, 25.0);
        let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
        assert!(names.contains(&"Troy"));
        assert!(names.contains(&"Albany"));
        assert!(!names.contains(&"Springfield"));
    }

    #[test]
    fn nearby_excludes_cities_without_coordinates() {
        let db = fixture_db();
        // Randsburg has no parsed coordinates and must never appear, even
        // with a huge radius.
        let hits = db.cities_nearby(35.0, -117.0, 10_000.0);
        assert!(hits.iter().all(|c| c.name() != "Randsburg"));
        assert!(!hits.is_empty());
    }

    #[test]
    fn basic_city_search_matches_alias() {
        let db = fixture_db();
        let hits = db.search_basic_cities("nyc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "New York");

        let by_name = db.search_basic_cities("los angeles");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].alias(), Some("LA"));
    }
}

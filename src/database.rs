use crate::components::prelude::*;
use crate::{read_records, AirportError};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// The airports, indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct AirportDatabase {
    /// Every entry's key is its airport's id
    airports: HashMap<AirportId, Airport>,
}

impl AirportDatabase {
    /// Indexes the airports by id. If an id repeats, the last airport with that id is kept.
    #[inline]
    pub fn from_list<I: IntoIterator<Item = Airport>>(airports: I) -> Self {
        let mut index = HashMap::new();
        for airport in airports {
            let id = airport.airport_id;
            if let Some(previous) = index.insert(id, airport) {
                warn!(
                    "Airport {} ({}) replaced by a later record",
                    id, previous.airport_name
                );
            }
        }
        debug!("Indexed {} airports", index.len());
        Self { airports: index }
    }

    /// Parses raw positional records into airports and indexes them.
    /// # Errors
    /// If any record is malformed. No database is produced in that case.
    #[inline]
    pub fn load_from_records<I, R, S>(records: I) -> Result<Self, AirportError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let airports = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Airport::from_record(record, i.saturating_add(1)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_list(airports))
    }

    /// Loads the airports from a delimited file.
    /// # Errors
    /// If the file cannot be read, or if any record is malformed.
    #[inline]
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        has_headers: bool,
        delimiter: u8,
    ) -> Result<Self, AirportError> {
        info!("Loading {}", path.as_ref().display());
        let records = read_records(path, has_headers, delimiter)?;
        let database = Self::load_from_records(&records)?;
        info!("Loaded {} airports", database.len());
        Ok(database)
    }

    /// Looks up an airport by id.
    /// # Errors
    /// If there is no airport with this id.
    #[inline]
    pub fn get_by_id(&self, id: AirportId) -> Result<&Airport, AirportError> {
        self.airports.get(&id).ok_or(AirportError::NotFound(id))
    }

    /// Whether an airport with this id is present.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: AirportId) -> bool {
        self.airports.contains_key(&id)
    }

    /// Whether this exact airport is present.
    /// # Errors
    /// If a different airport is stored under the same id.
    #[inline]
    pub fn contains_airport(&self, airport: &Airport) -> Result<bool, AirportError> {
        match self.airports.get(&airport.airport_id) {
            None => Ok(false),
            Some(stored) if stored == airport => Ok(true),
            Some(_) => Err(AirportError::DataCorruption(airport.airport_id)),
        }
    }

    /// A new database holding the airports accepted by the filter.
    #[inline]
    #[must_use]
    pub fn subset<F: AirportFilter + ?Sized>(&self, filter: &F) -> Self {
        let airports = self
            .airports
            .iter()
            .filter(|(_, airport)| filter.accepts(airport))
            .map(|(id, airport)| (*id, airport.clone()))
            .collect::<HashMap<_, _>>();
        debug!(
            "Filter kept {} of {} airports",
            airports.len(),
            self.airports.len()
        );
        Self { airports }
    }

    /// Computes the distance between every pair of airports.
    #[inline]
    #[must_use]
    pub fn distance_map(&self) -> AirportDistanceMap {
        AirportDistanceMap::new(&self.airports)
    }

    /// All the airports, in no particular order.
    #[inline]
    #[must_use]
    pub fn to_list(&self) -> Vec<Airport> {
        self.airports.values().cloned().collect()
    }

    /// Iterates over the airports in no particular order.
    #[inline]
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// The number of airports.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Whether there are no airports.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// The number of airports in the country divided by `field(country)`.
    /// A zero denominator follows float division and yields infinity or NaN.
    #[inline]
    #[must_use]
    #[allow(clippy::as_conversions)]
    #[allow(clippy::cast_precision_loss)]
    pub fn density_in<C, F>(&self, country: &C, field: F) -> f64
    where
        C: CountryName + ?Sized,
        F: Fn(&C) -> f64,
    {
        let count = self
            .airports
            .values()
            .filter(|a| a.country_name == country.country_name())
            .count();
        count as f64 / field(country)
    }
}

impl FromIterator<Airport> for AirportDatabase {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Airport>>(iter: T) -> Self {
        Self::from_list(iter)
    }
}

#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
#[allow(clippy::float_cmp)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn airport(id: i32, name: &str, country: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(
            AirportId(id),
            name.to_owned(),
            "City".to_owned(),
            country.to_owned(),
            Latitude(lat),
            Longitude(lon),
        )
    }

    fn sample() -> AirportDatabase {
        AirportDatabase::from_list(vec![
            airport(1, "North", "Numeria", 10.0, 10.0),
            airport(2, "South", "Numeria", -10.0, 10.0),
            airport(3, "Capital", "Borduria", 45.0, 20.0),
        ])
    }

    fn ids(airports: &[Airport]) -> HashSet<AirportId> {
        airports.iter().map(|a| a.airport_id).collect()
    }

    #[test]
    fn it_loads_the_airports_file() {
        let database = AirportDatabase::from_file(Path::new("./test/airports.dat"), false, b',')
            .expect("Failed to read airports.dat");
        assert_eq!(database.len(), 8);
        let heathrow = database.get_by_id(AirportId(1)).expect("Heathrow is missing");
        assert_eq!(heathrow.airport_name, "Heathrow Airport");
        assert_eq!(heathrow.city_name, "London");
        assert_eq!(heathrow.latitude, Latitude(51.4706));
        assert_eq!(heathrow.longitude, Longitude(-0.461941));
    }

    #[test]
    fn it_fails_the_whole_load_on_a_malformed_record() {
        let result = AirportDatabase::from_file(Path::new("./test/malformed.dat"), false, b',');
        assert!(matches!(result, Err(AirportError::InvalidCoordinate(_))));
    }

    #[test]
    fn it_keeps_the_last_duplicate() {
        let database = AirportDatabase::from_list(vec![
            airport(1, "First", "Numeria", 0.0, 0.0),
            airport(2, "Other", "Numeria", 1.0, 1.0),
            airport(1, "Second", "Numeria", 2.0, 2.0),
        ]);
        assert_eq!(database.len(), 2);
        let kept = database.get_by_id(AirportId(1)).expect("Airport 1 is missing");
        assert_eq!(kept.airport_name, "Second");
        let mut names = database
            .to_list()
            .into_iter()
            .map(|a| a.airport_name)
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["Other".to_owned(), "Second".to_owned()]);
    }

    #[test]
    fn it_agrees_on_membership_and_lookup() {
        let database = sample();
        for id in -1..5 {
            let id = AirportId(id);
            assert_eq!(database.contains(id), database.get_by_id(id).is_ok());
        }
        assert!(matches!(
            database.get_by_id(AirportId(42)),
            Err(AirportError::NotFound(AirportId(42)))
        ));
    }

    #[test]
    fn it_detects_corrupted_airports() {
        let database = sample();
        let stored = database.get_by_id(AirportId(1)).expect("Airport 1 is missing").clone();
        assert!(database.contains_airport(&stored).expect("Lookup failed"));
        let absent = airport(9, "Nowhere", "Numeria", 0.0, 0.0);
        assert!(!database.contains_airport(&absent).expect("Lookup failed"));
        let impostor = airport(1, "North", "Numeria", 10.0, 10.5);
        assert!(matches!(
            database.contains_airport(&impostor),
            Err(AirportError::DataCorruption(AirportId(1)))
        ));
    }

    #[test]
    fn it_filters_into_a_new_database() {
        let database = sample();
        assert_eq!(ids(&database.subset(&All).to_list()), ids(&database.to_list()));

        let numeria = database.subset(&InCountry("Numeria".to_owned()));
        assert_eq!(
            ids(&numeria.to_list()),
            [AirportId(1), AirportId(2)].into_iter().collect::<HashSet<_>>()
        );
        assert!(numeria
            .airports()
            .all(|a| InCountry("Numeria".to_owned()).accepts(a)));

        let none = database.subset(&|_: &Airport| false);
        assert!(none.is_empty());
        assert_eq!(database.len(), 3);
    }

    #[test]
    fn it_parses_records_in_memory() {
        let records = vec![
            vec!["10", "Alpha", "A", "Numeria", "", "", "0", "0"],
            vec!["11", "Beta", "B", "Numeria", "", "", "3", "4"],
        ];
        let database = AirportDatabase::load_from_records(records).expect("Failed to load");
        assert!(database.contains(AirportId(10)));
        assert!(database.contains(AirportId(11)));
    }

    #[test]
    fn it_computes_airport_density() {
        let database = sample();
        let numeria = Country::new("Numeria".to_owned(), 1000.0, 0.0);
        assert_eq!(database.density_in(&numeria, |_| 1000.0), 0.002);
        assert_eq!(database.density_in(&numeria, Country::population), 0.002);
        assert!(database.density_in(&numeria, Country::area).is_infinite());
        let atlantis = Country::new("Atlantis".to_owned(), 0.0, 0.0);
        assert!(database.density_in(&atlantis, Country::area).is_nan());
    }
}

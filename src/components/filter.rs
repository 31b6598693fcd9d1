use crate::components::airport::Airport;
use crate::components::wrappers::{Latitude, Longitude};

/// A predicate deciding which airports belong to a subset of a database.
pub trait AirportFilter {
    /// Whether the airport passes the filter.
    fn accepts(&self, airport: &Airport) -> bool;
}

/// Accepts every airport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct All;

impl AirportFilter for All {
    #[inline]
    fn accepts(&self, _airport: &Airport) -> bool {
        true
    }
}

/// Accepts airports whose country name matches exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct InCountry(pub String);

impl InCountry {
    /// Creates a filter for the named country.
    #[inline]
    #[must_use]
    pub const fn new(country_name: String) -> Self {
        Self(country_name)
    }
}

impl AirportFilter for InCountry {
    #[inline]
    fn accepts(&self, airport: &Airport) -> bool {
        airport.country_name == self.0
    }
}

/// Accepts airports inside a latitude/longitude box, bounds included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct InRegion {
    /// The southern bound
    pub min_latitude: Latitude,
    /// The northern bound
    pub max_latitude: Latitude,
    /// The western bound
    pub min_longitude: Longitude,
    /// The eastern bound
    pub max_longitude: Longitude,
}

impl InRegion {
    /// Creates a new bounding box.
    #[inline]
    #[must_use]
    pub const fn new(
        min_latitude: Latitude,
        max_latitude: Latitude,
        min_longitude: Longitude,
        max_longitude: Longitude,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }
}

impl AirportFilter for InRegion {
    #[inline]
    fn accepts(&self, airport: &Airport) -> bool {
        let lat = airport.latitude.0;
        let lon = airport.longitude.0;
        lat >= self.min_latitude.0
            && lat <= self.max_latitude.0
            && lon >= self.min_longitude.0
            && lon <= self.max_longitude.0
    }
}

/// Inverts another filter.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Not<F>(pub F);

impl<F> Not<F> {
    /// Inverts the filter.
    #[inline]
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self(filter)
    }
}

impl<F: AirportFilter> AirportFilter for Not<F> {
    #[inline]
    fn accepts(&self, airport: &Airport) -> bool {
        !self.0.accepts(airport)
    }
}

/// Accepts airports that pass both filters.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct And<A, B>(pub A, pub B);

impl<A, B> And<A, B> {
    /// Combines two filters.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self(first, second)
    }
}

impl<A: AirportFilter, B: AirportFilter> AirportFilter for And<A, B> {
    #[inline]
    fn accepts(&self, airport: &Airport) -> bool {
        self.0.accepts(airport) && self.1.accepts(airport)
    }
}

impl<F> AirportFilter for F
where
    F: Fn(&Airport) -> bool,
{
    #[inline]
    fn accepts(&self, airport: &Airport) -> bool {
        self(airport)
    }
}

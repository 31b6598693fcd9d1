use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// The ID for an airport.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    Hash,
    FromStr,
)]
#[non_exhaustive]
pub struct AirportId(pub i32);

/// A latitude in degrees.
/// Compared and hashed by bit pattern so that an airport can be used as a map key.
#[derive(Copy, Clone, Debug, Display, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Latitude(pub f64);

impl PartialEq for Latitude {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Latitude {}

impl Hash for Latitude {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// A longitude in degrees.
/// Compared and hashed by bit pattern so that an airport can be used as a map key.
#[derive(Copy, Clone, Debug, Display, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Longitude(pub f64);

impl PartialEq for Longitude {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Longitude {}

impl Hash for Longitude {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// The planar distance between two coordinates, in degrees.
#[derive(Copy, Clone, Debug, Display, PartialEq, PartialOrd, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Distance(pub f64);

#[allow(clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn it_parses_an_airport_id() {
        let id = "507".parse::<AirportId>().expect("Failed to parse id");
        assert_eq!(id, AirportId(507));
        assert!("LHR".parse::<AirportId>().is_err());
    }

    #[test]
    fn it_hashes_coordinates_by_bits() {
        let mut set = HashSet::new();
        set.insert(Latitude(51.4706));
        set.insert(Latitude(51.4706));
        set.insert(Latitude(-0.0));
        set.insert(Latitude(0.0));
        assert_eq!(set.len(), 3);
        assert_eq!(Longitude(f64::NAN), Longitude(f64::NAN));
    }
}

use crate::components::wrappers::{AirportId, Distance, Latitude, Longitude};
use crate::AirportError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The number of positional fields an airport record must supply.
const MIN_FIELDS: usize = 8;

/// A single airport.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub struct Airport {
    /// The unique id of the airport
    pub airport_id: AirportId,
    /// The name of the airport
    pub airport_name: String,
    /// The city the airport serves
    pub city_name: String,
    /// The country the airport is in
    pub country_name: String,
    /// The latitude in degrees
    pub latitude: Latitude,
    /// The longitude in degrees
    pub longitude: Longitude,
}

impl Airport {
    /// Creates a new airport.
    #[inline]
    #[must_use]
    pub fn new(
        airport_id: AirportId,
        airport_name: String,
        city_name: String,
        country_name: String,
        latitude: Latitude,
        longitude: Longitude,
    ) -> Self {
        Self {
            airport_id,
            airport_name,
            city_name,
            country_name,
            latitude,
            longitude,
        }
    }

    /// Parses an airport from the positional fields of a raw record.
    /// Fields 0, 1, 2 and 3 are the id, name, city and country; fields 6 and 7 are the latitude
    /// and longitude. Fields 4 and 5 and anything after field 7 are ignored.
    /// # Errors
    /// * If the record has fewer than 8 fields
    /// * If the id is not an integer or a coordinate is not a float
    #[inline]
    pub fn from_record<I, S>(fields: I, line: usize) -> Result<Self, AirportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = fields.into_iter().collect::<Vec<_>>();
        if fields.len() < MIN_FIELDS {
            return Err(AirportError::MalformedRecord {
                line,
                reason: format!("expected {} fields, found {}", MIN_FIELDS, fields.len()),
            });
        }
        Ok(Self {
            airport_id: field(&fields, 0, line)?.parse::<AirportId>()?,
            airport_name: field(&fields, 1, line)?.to_owned(),
            city_name: field(&fields, 2, line)?.to_owned(),
            country_name: field(&fields, 3, line)?.to_owned(),
            latitude: Latitude(coordinate(&fields, 6, line)?),
            longitude: Longitude(coordinate(&fields, 7, line)?),
        })
    }

    /// The straight-line distance between two airports, treating latitude and longitude as
    /// planar coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn distance_to(&self, other: &Airport) -> Distance {
        let d_lat = other.latitude.0 - self.latitude.0;
        let d_lon = other.longitude.0 - self.longitude.0;
        Distance((d_lat * d_lat + d_lon * d_lon).sqrt())
    }
}

impl Display for Airport {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}, {} ({}, {})",
            self.airport_id,
            self.airport_name,
            self.city_name,
            self.country_name,
            self.latitude,
            self.longitude
        )
    }
}

/// Returns the trimmed field at the given position.
fn field<S: AsRef<str>>(fields: &[S], i: usize, line: usize) -> Result<&str, AirportError> {
    fields
        .get(i)
        .map(|f| f.as_ref().trim())
        .ok_or_else(|| AirportError::MalformedRecord {
            line,
            reason: format!("missing field {}", i),
        })
}

/// Parses the field at the given position as a finite coordinate.
fn coordinate<S: AsRef<str>>(fields: &[S], i: usize, line: usize) -> Result<f64, AirportError> {
    let value = field(fields, i, line)?.parse::<f64>()?;
    if !value.is_finite() {
        return Err(AirportError::MalformedRecord {
            line,
            reason: format!("field {} is not a finite coordinate: {}", i, value),
        });
    }
    Ok(value)
}

pub use crate::components::airport::Airport;
pub use crate::components::country::{Countries, Country, CountryName};
pub use crate::components::filter::{AirportFilter, All, And, InCountry, InRegion, Not};
pub use crate::components::wrappers::{AirportId, Distance, Latitude, Longitude};
pub use crate::database::AirportDatabase;
pub use crate::distance_map::{AirportDistanceMap, DistanceSummary};

//! Airport database with pairwise distance statistics.
#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs
)]
#![allow(clippy::module_inception)]
#![allow(clippy::implicit_return)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::shadow_same)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::separated_literal_suffix)]
#![allow(clippy::float_arithmetic)]
#![allow(clippy::use_self)]
#![allow(clippy::pattern_type_mismatch)]
#![allow(clippy::pub_use)]

use crate::components::wrappers::AirportId;
use csv::StringRecord;
use serde::Deserialize;
use std::fs;
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;
use thiserror::Error;

/// Holds the leaf data types
pub mod components;
/// Holds the indexed airport collection
pub mod database;
/// Holds the pairwise distance structure
pub mod distance_map;

/// Errors that may occur when loading or querying airports.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AirportError {
    /// Error while reading a file on disk.
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    /// Error while reading a delimited file
    #[error("{0}")]
    CsvError(#[from] csv::Error),
    /// A record with too few fields or a non-finite coordinate
    #[error("record {line}: {reason}")]
    MalformedRecord {
        /// The 1-based record number
        line: usize,
        /// What was wrong with the record
        reason: String,
    },
    /// A non-numeric airport id
    #[error("invalid airport id: {0}")]
    InvalidId(#[from] ParseIntError),
    /// A non-numeric latitude or longitude
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseFloatError),
    /// No airport with this id
    #[error("airport {0} not found")]
    NotFound(AirportId),
    /// The airport is not part of the distance map
    #[error("airport {0} ({1}) is not in the distance map")]
    AirportNotInMap(AirportId, String),
    /// No distance stored for this pair of ids
    #[error("no distance between {0} and {1}")]
    DistanceNotFound(AirportId, AirportId),
    /// Two different airports share an id
    #[error("airport {0} differs from the stored airport with the same id")]
    DataCorruption(AirportId),
    /// Statistics on a map with fewer than two airports
    #[error("the distance map is empty")]
    EmptyMap,
    /// No country with this name
    #[error("country {0} not found")]
    UnknownCountry(String),
}

/// Reads every record of a delimited file.
/// # Errors
/// If the file cannot be read or any record is not valid.
#[inline]
pub fn read_records<P: AsRef<Path>>(
    path: P,
    has_headers: bool,
    delimiter: u8,
) -> Result<Vec<StringRecord>, AirportError> {
    let data = fs::read_to_string(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(data.as_bytes());
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Returns a vector of rows from a CSV file.
pub trait LoadCsv
where
    Self: Sized,
{
    /// Returns a vector of rows from a CSV file with a header line.
    /// # Errors
    /// Returns an error if the file cannot be read or a row does not deserialize.
    fn load_csv<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<Self>, AirportError>;
}

impl<T: Sized + for<'de> Deserialize<'de>> LoadCsv for T {
    #[inline]
    fn load_csv<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<Self>, AirportError> {
        let data = fs::read_to_string(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());
        let rows = rdr.deserialize().collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

use crate::{AirportError, LoadCsv};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Anything that names a country.
pub trait CountryName {
    /// The name of the country, as it appears on airport records.
    fn country_name(&self) -> &str;
}

/// A row of the countries file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Country {
    /// The name of the country
    pub country_name: String,
    /// The number of inhabitants
    pub population: f64,
    /// The area in square kilometres
    pub area: f64,
}

impl Country {
    /// Creates a new country.
    #[inline]
    #[must_use]
    pub const fn new(country_name: String, population: f64, area: f64) -> Self {
        Self {
            country_name,
            population,
            area,
        }
    }

    /// The population, for use as a density denominator.
    #[inline]
    #[must_use]
    pub const fn population(&self) -> f64 {
        self.population
    }

    /// The area, for use as a density denominator.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }
}

impl CountryName for Country {
    #[inline]
    fn country_name(&self) -> &str {
        &self.country_name
    }
}

/// The countries from the countries file, by name.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Countries {
    /// The countries
    pub countries: HashMap<String, Country>,
}

impl Countries {
    /// Loads the countries from a comma separated file with a
    /// `country_name,population,area` header.
    /// # Errors
    /// Returns an error if the file could not be loaded.
    #[inline]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AirportError> {
        let countries = Country::load_csv(path, b',')?
            .into_iter()
            .map(|c| (c.country_name.clone(), c))
            .collect();
        Ok(Self { countries })
    }

    /// Looks up a country by name.
    /// # Errors
    /// If no country has this name.
    #[inline]
    pub fn get(&self, name: &str) -> Result<&Country, AirportError> {
        self.countries
            .get(name)
            .ok_or_else(|| AirportError::UnknownCountry(name.to_owned()))
    }
}

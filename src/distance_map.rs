use crate::components::prelude::*;
use crate::AirportError;
use log::info;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The distance between every two distinct airports of a database.
/// Each distance is stored under both orderings of the pair, but every statistic counts each
/// unordered pair once.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct AirportDistanceMap {
    /// The airports by id
    airports: HashMap<AirportId, Airport>,
    /// The ids by airport
    ids: HashMap<Airport, AirportId>,
    /// The distances by ordered pair of ids
    distances: HashMap<(AirportId, AirportId), Distance>,
    /// One distance per unordered pair, ascending
    sorted: Vec<f64>,
}

/// The descriptive statistics of a distance map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct DistanceSummary {
    /// The number of unordered pairs
    pub pairs: usize,
    /// The smallest distance
    pub min: Distance,
    /// The largest distance
    pub max: Distance,
    /// The arithmetic mean
    pub mean: Distance,
    /// The median
    pub median: Distance,
    /// The population standard deviation
    pub std_dev: Distance,
}

impl Display for DistanceSummary {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pairs:              {}", self.pairs)?;
        writeln!(f, "Minimum distance:   {:.4}", self.min.0)?;
        writeln!(f, "Maximum distance:   {:.4}", self.max.0)?;
        writeln!(f, "Average distance:   {:.4}", self.mean.0)?;
        writeln!(f, "Median distance:    {:.4}", self.median.0)?;
        write!(f, "Standard deviation: {:.4}", self.std_dev.0)
    }
}

impl AirportDistanceMap {
    /// Computes the distance between every pair of distinct airports.
    pub(crate) fn new(airports: &HashMap<AirportId, Airport>) -> Self {
        let mut ordered = airports.values().collect::<Vec<_>>();
        ordered.sort_by_key(|a| a.airport_id);

        let pair_count = ordered.len().saturating_mul(ordered.len().saturating_sub(1)) / 2;
        let mut distances = HashMap::with_capacity(pair_count.saturating_mul(2));
        let mut sorted = Vec::with_capacity(pair_count);
        for (i, a) in ordered.iter().enumerate() {
            for b in ordered.iter().skip(i.saturating_add(1)) {
                let distance = a.distance_to(b);
                distances.insert((a.airport_id, b.airport_id), distance);
                distances.insert((b.airport_id, a.airport_id), distance);
                sorted.push(distance.0);
            }
        }
        sorted.sort_by(f64::total_cmp);

        let ids = airports
            .iter()
            .map(|(id, airport)| (airport.clone(), *id))
            .collect();
        info!(
            "Computed {} distances between {} airports",
            sorted.len(),
            airports.len()
        );
        Self {
            airports: airports.clone(),
            ids,
            distances,
            sorted,
        }
    }

    /// Whether there are no pairs, i.e. fewer than two airports.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The number of unordered pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// The number of airports the map was built from.
    #[inline]
    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// The smallest distance.
    /// # Errors
    /// If the map is empty.
    #[inline]
    pub fn min_distance(&self) -> Result<Distance, AirportError> {
        self.sorted
            .first()
            .copied()
            .map(Distance)
            .ok_or(AirportError::EmptyMap)
    }

    /// The largest distance.
    /// # Errors
    /// If the map is empty.
    #[inline]
    pub fn max_distance(&self) -> Result<Distance, AirportError> {
        self.sorted
            .last()
            .copied()
            .map(Distance)
            .ok_or(AirportError::EmptyMap)
    }

    /// The arithmetic mean distance.
    /// # Errors
    /// If the map is empty.
    #[inline]
    pub fn avg_distance(&self) -> Result<Distance, AirportError> {
        self.mean().map(Distance)
    }

    /// The median distance. With an even number of pairs this is the mean of the two central
    /// distances.
    /// # Errors
    /// If the map is empty.
    #[inline]
    pub fn median_distance(&self) -> Result<Distance, AirportError> {
        let n = self.sorted.len();
        let upper = *self.sorted.get(n / 2).ok_or(AirportError::EmptyMap)?;
        if n % 2 == 1 {
            return Ok(Distance(upper));
        }
        let lower = *self
            .sorted
            .get(n.saturating_sub(1) / 2)
            .ok_or(AirportError::EmptyMap)?;
        Ok(Distance((lower + upper) / 2.0))
    }

    /// The population standard deviation of the distances.
    /// # Errors
    /// If the map is empty.
    #[inline]
    #[allow(clippy::as_conversions)]
    #[allow(clippy::cast_precision_loss)]
    pub fn std_dev(&self) -> Result<Distance, AirportError> {
        let mean = self.mean()?;
        let squares = self
            .sorted
            .iter()
            .map(|d| (d - mean).powi(2))
            .sum::<f64>();
        Ok(Distance((squares / self.sorted.len() as f64).sqrt()))
    }

    /// All the statistics at once.
    /// # Errors
    /// If the map is empty.
    #[inline]
    pub fn summary(&self) -> Result<DistanceSummary, AirportError> {
        Ok(DistanceSummary {
            pairs: self.len(),
            min: self.min_distance()?,
            max: self.max_distance()?,
            mean: self.avg_distance()?,
            median: self.median_distance()?,
            std_dev: self.std_dev()?,
        })
    }

    /// The distance between the airports with these ids.
    /// # Errors
    /// * If either id is not in the map
    /// * If both ids are the same, since self pairs are not stored
    #[inline]
    pub fn distance_between(&self, a: AirportId, b: AirportId) -> Result<Distance, AirportError> {
        if let Some(distance) = self.distances.get(&(a, b)) {
            return Ok(*distance);
        }
        if !self.airports.contains_key(&a) {
            return Err(AirportError::NotFound(a));
        }
        if !self.airports.contains_key(&b) {
            return Err(AirportError::NotFound(b));
        }
        Err(AirportError::DistanceNotFound(a, b))
    }

    /// The distance between two airports.
    /// # Errors
    /// If either airport is not in the map, or both are the same airport.
    #[inline]
    pub fn distance_between_airports(
        &self,
        a: &Airport,
        b: &Airport,
    ) -> Result<Distance, AirportError> {
        let id_a = self.id_of(a)?;
        let id_b = self.id_of(b)?;
        self.distance_between(id_a, id_b)
    }

    fn id_of(&self, airport: &Airport) -> Result<AirportId, AirportError> {
        self.ids
            .get(airport)
            .copied()
            .ok_or_else(|| {
                AirportError::AirportNotInMap(airport.airport_id, airport.airport_name.clone())
            })
    }

    #[allow(clippy::as_conversions)]
    #[allow(clippy::cast_precision_loss)]
    fn mean(&self) -> Result<f64, AirportError> {
        if self.sorted.is_empty() {
            return Err(AirportError::EmptyMap);
        }
        Ok(self.sorted.iter().sum::<f64>() / self.sorted.len() as f64)
    }
}

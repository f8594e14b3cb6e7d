//! Analytical queries over a [`TaxiPark`] snapshot.
//!
//! Each query is an independent, read-only aggregation: it walks the
//! trip log, builds whatever grouping map it needs, and returns an
//! owned result. Nothing here mutates the park or keeps state between
//! calls, so a shared reference can serve any number of callers.

use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use crate::domain::{Driver, Passenger, TaxiPark, Trip};

/// Width of a trip-duration histogram bucket, in minutes.
const DURATION_BUCKET_MINUTES: u32 = 10;

/// Share of total income the top drivers must cover under the 80/20 rule.
const PARETO_INCOME_SHARE: f64 = 0.8;

/// Share of the driver roster considered "top" under the 80/20 rule.
const PARETO_DRIVER_SHARE: f64 = 0.2;

/// The distinct passengers of a trip. Duplicate slots in the passenger
/// list collapse to one entry, so membership counts once per trip.
fn distinct_passengers(trip: &Trip) -> HashSet<&Passenger> {
    trip.passengers.iter().collect()
}

impl TaxiPark {
    /// Returns the drivers who performed no trips.
    #[must_use]
    pub fn fake_drivers(&self) -> HashSet<Driver> {
        let active: HashSet<&Driver> = self.trips.iter().map(|trip| &trip.driver).collect();

        self.all_drivers
            .iter()
            .filter(|driver| !active.contains(*driver))
            .cloned()
            .collect()
    }

    /// Returns the passengers who took part in at least `min_trips`
    /// trips.
    ///
    /// Membership in a single trip counts once however many times the
    /// passenger appears in its list. A threshold of zero returns every
    /// registered passenger.
    #[must_use]
    pub fn faithful_passengers(&self, min_trips: usize) -> HashSet<Passenger> {
        let counts = self.trip_count_by_passenger();

        self.all_passengers
            .iter()
            .filter(|passenger| counts.get(*passenger).copied().unwrap_or(0) >= min_trips)
            .cloned()
            .collect()
    }

    /// Returns the passengers taken by `driver` strictly more than
    /// once. Empty when the driver performed no trips.
    #[must_use]
    pub fn frequent_passengers(&self, driver: &Driver) -> HashSet<Passenger> {
        let mut counts: HashMap<&Passenger, usize> = HashMap::new();

        for trip in self.trips.iter().filter(|trip| &trip.driver == driver) {
            for passenger in distinct_passengers(trip) {
                *counts.entry(passenger).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(passenger, _)| passenger.clone())
            .collect()
    }

    /// Returns the passengers who were discounted on the strict
    /// majority of their trips.
    ///
    /// A passenger with as many discounted as full-price trips does not
    /// qualify, and neither does a passenger with no trips at all.
    #[must_use]
    pub fn smart_passengers(&self) -> HashSet<Passenger> {
        // (discounted, full price) trip counts per passenger
        let mut counts: HashMap<&Passenger, (usize, usize)> = HashMap::new();

        for trip in &self.trips {
            for passenger in distinct_passengers(trip) {
                let entry = counts.entry(passenger).or_insert((0, 0));
                if trip.discounted() {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        counts
            .into_iter()
            .filter(|&(_, (discounted, full_price))| discounted > full_price)
            .map(|(passenger, _)| passenger.clone())
            .collect()
    }

    /// Returns the 10-minute duration period containing the most trips.
    ///
    /// Periods are `0..=9`, `10..=19`, and so on. When several periods
    /// tie for the maximum, any one of them may be returned. `None`
    /// when the park has no trips.
    #[must_use]
    pub fn most_frequent_trip_duration_period(&self) -> Option<RangeInclusive<u32>> {
        let mut buckets: HashMap<u32, usize> = HashMap::new();

        for trip in &self.trips {
            *buckets
                .entry(trip.duration / DURATION_BUCKET_MINUTES)
                .or_insert(0) += 1;
        }

        buckets
            .into_iter()
            .max_by_key(|&(_, count)| count)
            .map(|(bucket, _)| {
                let start = bucket * DURATION_BUCKET_MINUTES;
                start..=start.saturating_add(DURATION_BUCKET_MINUTES - 1)
            })
    }

    /// Checks whether the fleet follows the 80/20 rule: at most 20% of
    /// the drivers generate at least 80% of the total income.
    ///
    /// Always `false` for a park without trips, whatever the size of
    /// the driver roster. Drivers without trips earn nothing and never
    /// end up among the top earners, but they still enlarge the roster
    /// the 20% cut is taken from.
    #[must_use]
    pub fn check_pareto_principle(&self) -> bool {
        if self.trips.is_empty() {
            return false;
        }

        let mut incomes: Vec<f64> = self.income_by_driver().into_values().collect();
        incomes.sort_by(|a, b| b.total_cmp(a));

        let total: f64 = incomes.iter().sum();
        let threshold = total * PARETO_INCOME_SHARE;
        let top_driver_quota = (self.all_drivers.len() as f64 * PARETO_DRIVER_SHARE) as usize;

        let mut accumulated = 0.0;
        for (drivers_used, income) in incomes.iter().enumerate() {
            accumulated += income;
            if accumulated >= threshold {
                return drivers_used + 1 <= top_driver_quota;
            }
        }

        false
    }

    /// Returns each driver's total income, summed over their trips.
    ///
    /// Drivers without trips are absent from the map.
    #[must_use]
    pub fn income_by_driver(&self) -> HashMap<Driver, f64> {
        let mut incomes: HashMap<Driver, f64> = HashMap::new();

        for trip in &self.trips {
            *incomes.entry(trip.driver.clone()).or_insert(0.0) += trip.cost;
        }

        incomes
    }

    /// Returns how many trips each passenger took part in, counting a
    /// trip once per passenger.
    ///
    /// Passengers without trips are absent from the map.
    #[must_use]
    pub fn trip_count_by_passenger(&self) -> HashMap<Passenger, usize> {
        let mut counts: HashMap<Passenger, usize> = HashMap::new();

        for trip in &self.trips {
            for passenger in distinct_passengers(trip) {
                *counts.entry(passenger.clone()).or_insert(0) += 1;
            }
        }

        counts
    }
}

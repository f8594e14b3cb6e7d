//! Domain types for taxi fleet analytics.
//!
//! This module contains the core domain types for the taxipark crate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};

/// Unique identifier for a driver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Driver(pub String);

impl Driver {
    /// Create a new driver id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Driver {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Driver {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a passenger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger(pub String);

impl Passenger {
    /// Create a new passenger id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Passenger {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Passenger {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One recorded taxi ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// The driver who performed the ride
    pub driver: Driver,

    /// Passengers carried on the ride; never empty in a valid park.
    /// A passenger listed more than once still counts as a single
    /// participant of this trip.
    pub passengers: Vec<Passenger>,

    /// Ride duration in minutes
    pub duration: u32,

    /// Ride cost
    pub cost: f64,

    /// Discount applied to the ride, if any
    pub discount: Option<f64>,
}

impl Trip {
    /// Returns true if a discount was applied to this trip.
    #[must_use]
    pub fn discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// Returns true if the passenger took part in this trip.
    #[must_use]
    pub fn carried(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }
}

/// An immutable snapshot of a taxi fleet: the registered drivers and
/// passengers plus the trips they performed.
///
/// Every driver and passenger referenced by a trip must belong to
/// `all_drivers` / `all_passengers`. Queries assume this invariant and
/// never re-check it; [`TaxiPark::new`] enforces it at construction.
/// Callers that assemble the struct literally take responsibility for
/// the invariant themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxiPark {
    /// All registered drivers, including those without trips
    pub all_drivers: HashSet<Driver>,

    /// All registered passengers, including those without trips
    pub all_passengers: HashSet<Passenger>,

    /// Recorded trips, in no particular order
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Builds a park after validating that every trip references only
    /// registered drivers and passengers, carries at least one
    /// passenger, and has a finite, non-negative cost.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDriver`] or [`Error::UnknownPassenger`]
    /// for a dangling reference, [`Error::NoPassengers`] for a trip
    /// without passengers, and [`Error::InvalidCost`] for a negative
    /// or non-finite cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use taxipark::{Driver, Passenger, TaxiPark, Trip};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let drivers: HashSet<Driver> = [Driver::new("D-1")].into_iter().collect();
    /// let passengers: HashSet<Passenger> = [Passenger::new("P-1")].into_iter().collect();
    /// let trips = vec![Trip {
    ///     driver: Driver::new("D-1"),
    ///     passengers: vec![Passenger::new("P-1")],
    ///     duration: 15,
    ///     cost: 7.5,
    ///     discount: None,
    /// }];
    ///
    /// let park = TaxiPark::new(drivers, passengers, trips)?;
    /// assert!(park.fake_drivers().is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        all_drivers: HashSet<Driver>,
        all_passengers: HashSet<Passenger>,
        trips: Vec<Trip>,
    ) -> Result<Self> {
        for (index, trip) in trips.iter().enumerate() {
            if !all_drivers.contains(&trip.driver) {
                return Err(Error::UnknownDriver(trip.driver.clone()));
            }

            if trip.passengers.is_empty() {
                return Err(Error::NoPassengers { index });
            }

            for passenger in &trip.passengers {
                if !all_passengers.contains(passenger) {
                    return Err(Error::UnknownPassenger(passenger.clone()));
                }
            }

            if !trip.cost.is_finite() || trip.cost < 0.0 {
                return Err(Error::InvalidCost {
                    index,
                    cost: trip.cost,
                });
            }
        }

        debug!(
            drivers = all_drivers.len(),
            passengers = all_passengers.len(),
            trips = trips.len(),
            "validated taxi park"
        );

        Ok(Self {
            all_drivers,
            all_passengers,
            trips,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(driver: &str, passengers: &[&str], cost: f64) -> Trip {
        Trip {
            driver: Driver::new(driver),
            passengers: passengers.iter().copied().map(Passenger::new).collect(),
            duration: 10,
            cost,
            discount: None,
        }
    }

    fn registry(ids: &[&str]) -> HashSet<Driver> {
        ids.iter().copied().map(Driver::new).collect()
    }

    fn passenger_registry(ids: &[&str]) -> HashSet<Passenger> {
        ids.iter().copied().map(Passenger::new).collect()
    }

    #[test]
    fn new_accepts_consistent_park() {
        let park = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1", "P-2"]),
            vec![trip("D-1", &["P-1", "P-2"], 20.0)],
        )
        .unwrap();

        assert_eq!(park.trips.len(), 1);
    }

    #[test]
    fn new_rejects_unregistered_driver() {
        let err = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1"]),
            vec![trip("D-2", &["P-1"], 20.0)],
        )
        .unwrap_err();

        assert!(matches!(err, Error::UnknownDriver(driver) if driver.as_str() == "D-2"));
    }

    #[test]
    fn new_rejects_unregistered_passenger() {
        let err = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1"]),
            vec![trip("D-1", &["P-1", "P-9"], 20.0)],
        )
        .unwrap_err();

        assert!(matches!(err, Error::UnknownPassenger(p) if p.as_str() == "P-9"));
    }

    #[test]
    fn new_rejects_empty_passenger_list() {
        let err = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1"]),
            vec![trip("D-1", &[], 20.0)],
        )
        .unwrap_err();

        assert!(matches!(err, Error::NoPassengers { index: 0 }));
    }

    #[test]
    fn new_rejects_negative_cost() {
        let err = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1"]),
            vec![trip("D-1", &["P-1"], -1.0)],
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidCost { index: 0, .. }));
    }

    #[test]
    fn new_rejects_non_finite_cost() {
        let err = TaxiPark::new(
            registry(&["D-1"]),
            passenger_registry(&["P-1"]),
            vec![trip("D-1", &["P-1"], f64::NAN)],
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidCost { index: 0, .. }));
    }
}

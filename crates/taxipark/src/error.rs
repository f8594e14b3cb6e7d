//! Error types for taxipark dataset construction.

use thiserror::Error;

use crate::domain::{Driver, Passenger};

/// The error type for taxipark dataset construction.
///
/// Queries themselves are total and never fail; errors only arise when
/// [`TaxiPark::new`](crate::TaxiPark::new) rejects an inconsistent
/// dataset.
#[derive(Debug, Error)]
pub enum Error {
    /// A trip references a driver missing from the driver registry.
    #[error("unknown driver: {0}")]
    UnknownDriver(Driver),

    /// A trip references a passenger missing from the passenger registry.
    #[error("unknown passenger: {0}")]
    UnknownPassenger(Passenger),

    /// A trip carries no passengers.
    #[error("trip #{index} has no passengers")]
    NoPassengers {
        /// Position of the offending trip in the trip log.
        index: usize,
    },

    /// A trip cost is negative or not a finite number.
    #[error("trip #{index} has invalid cost {cost}")]
    InvalidCost {
        /// Position of the offending trip in the trip log.
        index: usize,
        /// The rejected cost value.
        cost: f64,
    },
}

/// A specialized Result type for taxipark operations.
pub type Result<T> = std::result::Result<T, Error>;

//! In-memory analytics over taxi fleet trip records.
//!
//! This crate answers one-shot analytical questions about a fixed
//! snapshot of a taxi fleet: which drivers never drove, which
//! passengers ride often enough to matter, whether fleet income
//! follows the 80/20 rule. Callers build a [`TaxiPark`] and invoke
//! the queries they need; queries never mutate the park and keep no
//! state between calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod domain;
pub mod error;
pub mod queries;

pub use domain::{Driver, Passenger, TaxiPark, Trip};
pub use error::{Error, Result};

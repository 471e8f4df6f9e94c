//! Neff's anterior coefficient: the ratio of summed mandibular to summed
//! maxillary anterior tooth widths, classified against the 1.20-1.22 ideal.
//!
//! Note that the population ideal widths (8.5, 7.6, 5.0, 6.5 mm) evaluate to
//! roughly 0.714 under this formula and so land below the ideal band. The
//! formula, defaults and band limits are kept exactly as published.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod measurements;
pub mod reference;
pub mod session;

pub use error::{InvalidInput, NeffError, NeffResult};
pub use evaluator::{evaluate, Band, CoefficientResult};
pub use measurements::{MeasurementField, MeasurementSet};
pub use session::{FormCommand, Session};

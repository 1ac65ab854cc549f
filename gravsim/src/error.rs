//! Configuration errors for the n-body engine
//!
//! Every variant is detected before the first step runs; a run never
//! proceeds with a partially valid setup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body {index}: mass must be positive and finite, got {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index}: position and velocity must be finite")]
    NonFiniteState { index: usize },

    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("softening length must be positive and finite, got {0}")]
    NonPositiveSoftening(f64),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("body {index}: expected {expected} components, found {found}")]
    DimensionMismatch { index: usize, expected: usize, found: usize },

    #[error("scenario is {found}-dimensional but was built as {expected}-dimensional")]
    ScenarioDimension { expected: usize, found: usize },

    #[error("{what}: range [{low}, {high}) is empty or not finite")]
    InvalidRange { what: &'static str, low: f64, high: f64 },

    #[error("report interval must be at least 1")]
    InvalidReportInterval,

    #[error("scenario defines no bodies")]
    NoBodies,
}

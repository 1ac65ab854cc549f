//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` and default run length `steps`,
//! - softening length `softening` (the force law uses `softening^2`),
//! - gravitational constant `g`
//!
//! Values are checked once in [`Parameters::new`]; a `Parameters` value that
//! exists is always usable.

use crate::error::ConfigError;

/// Newton's constant in SI units (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.674e-11;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub(crate) dt: f64,        // step size
    pub(crate) softening: f64, // softening length
    pub(crate) g: f64,         // gravitational constant
    pub(crate) steps: usize,   // default number of steps for a batch run
}

impl Parameters {
    pub fn new(dt: f64, softening: f64, g: f64, steps: usize) -> Result<Self, ConfigError> {
        check_time_step(dt)?;
        if !(softening.is_finite() && softening > 0.0) {
            return Err(ConfigError::NonPositiveSoftening(softening));
        }
        if !(g.is_finite() && g > 0.0) {
            return Err(ConfigError::InvalidGravitationalConstant(g));
        }
        Ok(Self { dt, softening, g, steps })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn softening(&self) -> f64 {
        self.softening
    }

    /// Softening squared, the term added to every pair distance squared
    pub fn eps2(&self) -> f64 {
        self.softening * self.softening
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

pub(crate) fn check_time_step(dt: f64) -> Result<(), ConfigError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveTimeStep(dt))
    }
}

//! High-level runtime engine settings
//!
//! Selects the integration scheme and the force evaluation strategy
//! used when building and running a `Scenario`

use crate::simulation::forces::{AccelSet, NewtonianGravity, ParallelNewtonianGravity};
use crate::simulation::integrator::IntegratorConfig;
use crate::simulation::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // verlet or euler
    pub parallel: bool,               // false = direct pair sum, true = rayon per-body sum
}

impl Engine {
    pub fn new(integrator: IntegratorConfig) -> Self {
        Self { integrator, parallel: false }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the force set for these settings
    pub fn forces<const D: usize>(&self, parameters: &Parameters) -> AccelSet<D> {
        let (g, eps2) = (parameters.g(), parameters.eps2());
        if self.parallel {
            AccelSet::new().with(ParallelNewtonianGravity { g, eps2 })
        } else {
            AccelSet::new().with(NewtonianGravity { g, eps2 })
        }
    }
}

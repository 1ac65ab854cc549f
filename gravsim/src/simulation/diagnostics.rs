//! Read-only aggregate queries over a system
//!
//! Used for logging and validation, never fed back into the physics.

use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec, System};

pub fn total_mass<const D: usize>(sys: &System<D>) -> f64 {
    sys.bodies.iter().map(|b| b.m).sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass<const D: usize>(sys: &System<D>) -> Option<NVec<D>> {
    let m = total_mass(sys);
    if sys.bodies.is_empty() || m <= 0.0 {
        return None;
    }
    let mut com = NVec::<D>::zeros();
    for b in &sys.bodies {
        com += b.m * b.x;
    }
    Some(com / m)
}

/// Sum of m * v over all bodies
pub fn total_momentum<const D: usize>(sys: &System<D>) -> NVec<D> {
    let mut p = NVec::<D>::zeros();
    for b in &sys.bodies {
        p += b.m * b.v;
    }
    p
}

pub fn kinetic_energy<const D: usize>(sys: &System<D>) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Potential energy of the active force terms (softened for gravity)
pub fn potential_energy<const D: usize>(sys: &System<D>, forces: &AccelSet<D>) -> f64 {
    forces.potential_energy(sys)
}

pub fn total_energy<const D: usize>(sys: &System<D>, forces: &AccelSet<D>) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, forces)
}

/// Aggregate state of a system at one step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<const D: usize> {
    pub step: usize,
    pub t: f64,
    pub center_of_mass: Option<NVec<D>>,
    pub momentum: NVec<D>,
    pub energy: f64,
}

impl<const D: usize> Snapshot<D> {
    pub fn capture(step: usize, sys: &System<D>, forces: &AccelSet<D>) -> Self {
        Self {
            step,
            t: sys.t,
            center_of_mass: center_of_mass(sys),
            momentum: total_momentum(sys),
            energy: total_energy(sys, forces),
        }
    }
}

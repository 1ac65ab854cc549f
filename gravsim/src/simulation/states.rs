//! Core state types for the N-body simulation.
//!
//! Bodies and systems are generic over the spatial dimension `D`:
//! - `Body<2>` / `System<2>` using `NVec2` (2d)
//! - `Body<3>` / `System<3>` using `NVec3` (3d)
//!
//! A system holds the ordered list of bodies and the current simulation time `t`.
//! Presentation data (radius, color, label, trails) lives in `visualization`.

use nalgebra::{SVector, Vector2, Vector3};

use crate::error::ConfigError;

pub type NVec<const D: usize> = SVector<f64, D>;
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

pub type Body2 = Body<2>;
pub type Body3 = Body<3>;
pub type System2 = System<2>;
pub type System3 = System<3>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body<const D: usize> {
    pub x: NVec<D>, // position
    pub v: NVec<D>, // velocity
    pub a: NVec<D>, // acceleration, overwritten by every force evaluation
    pub m: f64,     // mass
}

impl<const D: usize> Body<D> {
    pub fn new(x: NVec<D>, v: NVec<D>, m: f64) -> Self {
        Self { x, v, a: NVec::<D>::zeros(), m }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !(self.m.is_finite() && self.m > 0.0) {
            return Err(ConfigError::NonPositiveMass { index, mass: self.m });
        }
        if !(self.x.iter().all(|c| c.is_finite()) && self.v.iter().all(|c| c.is_finite())) {
            return Err(ConfigError::NonFiniteState { index });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System<const D: usize> {
    pub(crate) bodies: Vec<Body<D>>,
    pub t: f64, // time
}

impl<const D: usize> System<D> {
    /// Build a system at `t = 0`, rejecting non-positive masses and non-finite state
    pub fn new(bodies: Vec<Body<D>>) -> Result<Self, ConfigError> {
        for (i, b) in bodies.iter().enumerate() {
            b.validate(i)?;
        }
        Ok(Self { bodies, t: 0.0 })
    }

    pub fn bodies(&self) -> &[Body<D>] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Append a body between steps. Its acceleration stays zero until the next
    /// force evaluation.
    pub fn push(&mut self, body: Body<D>) -> Result<(), ConfigError> {
        body.validate(self.bodies.len())?;
        self.bodies.push(body);
        Ok(())
    }

    /// Remove the body at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Body<D>> {
        (index < self.bodies.len()).then(|| self.bodies.remove(index))
    }

    /// Shift every velocity by the mass-weighted mean velocity so the total
    /// momentum is zero.
    pub fn zero_momentum(&mut self) {
        let total_mass: f64 = self.bodies.iter().map(|b| b.m).sum();
        if total_mass <= 0.0 {
            return;
        }
        let mut p = NVec::<D>::zeros();
        for b in &self.bodies {
            p += b.m * b.v;
        }
        let v_com = p / total_mass;
        for b in self.bodies.iter_mut() {
            b.v -= v_com;
        }
    }

    /// True if every position, velocity and acceleration is finite
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| {
            b.x.iter().chain(b.v.iter()).chain(b.a.iter()).all(|c| c.is_finite())
        })
    }
}

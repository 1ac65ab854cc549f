//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and its collection, with direct
//! Newtonian gravity and a rayon-parallel variant of the same sum

use rayon::prelude::*;

use crate::simulation::states::{NVec, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet<const D: usize> {
    terms: Vec<Box<dyn Acceleration<D> + Send + Sync>>,
}

impl<const D: usize> Default for AccelSet<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> AccelSet<D> {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration<D> + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System<D>, out: &mut [NVec<D>]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec::<D>::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }

    /// Recompute accelerations at the current positions and store them in
    /// each body's `a`. Positions, velocities and masses are left untouched.
    pub fn apply(&self, sys: &mut System<D>) {
        let mut out = vec![NVec::<D>::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys.t, sys, &mut out);
        for (b, a) in sys.bodies.iter_mut().zip(out) {
            b.a = a;
        }
    }

    /// Sum of the potential energy of every term
    pub fn potential_energy(&self, sys: &System<D>) -> f64 {
        self.terms.iter().map(|term| term.potential_energy(sys)).sum()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration<const D: usize> {
    fn acceleration(&self, t: f64, sys: &System<D>, out: &mut [NVec<D>]);

    /// Potential energy associated with this term, if it has one
    fn potential_energy(&self, _sys: &System<D>) -> f64 {
        0.0
    }
}

/// Newtonian gravity with softening (direct n^2 sum over unordered pairs)
/// `eps2` is the softening length squared and keeps every pair distance
/// strictly positive
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64,    // gravitational constant
    pub eps2: f64, // softening
}

impl<const D: usize> Acceleration<D> for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System<D>, out: &mut [NVec<D>]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;

                // Softened squared distance
                let d2 = r.dot(&r) + self.eps2;

                // G / |r_soft|^3
                let inv_r = d2.sqrt().recip();
                let coef = self.g * inv_r * inv_r * inv_r;

                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }

    fn potential_energy(&self, sys: &System<D>) -> f64 {
        pair_potential(self.g, self.eps2, sys)
    }
}

/// Same force law as [`NewtonianGravity`], evaluated in parallel with rayon.
///
/// Work is split by body index: each worker sums all pulls on its own body
/// and writes only `out[i]`, reading positions and masses that nothing
/// mutates during the force phase. Every pair is visited twice, so this only
/// pays off for larger `n`.
#[derive(Debug, Clone, Copy)]
pub struct ParallelNewtonianGravity {
    pub g: f64,
    pub eps2: f64,
}

impl<const D: usize> Acceleration<D> for ParallelNewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System<D>, out: &mut [NVec<D>]) {
        let bodies = &sys.bodies;
        out.par_iter_mut().enumerate().for_each(|(i, acc)| {
            let xi = bodies[i].x;
            let mut sum = NVec::<D>::zeros();
            for (j, bj) in bodies.iter().enumerate() {
                if j == i {
                    continue;
                }
                let r = bj.x - xi;
                let d2 = r.dot(&r) + self.eps2;
                let inv_r = d2.sqrt().recip();
                sum += self.g * inv_r * inv_r * inv_r * bj.m * r;
            }
            *acc += sum;
        });
    }

    fn potential_energy(&self, sys: &System<D>) -> f64 {
        pair_potential(self.g, self.eps2, sys)
    }
}

/// Softened pair potential: -sum G m_i m_j / sqrt(|r|^2 + eps2)
fn pair_potential<const D: usize>(g: f64, eps2: f64, sys: &System<D>) -> f64 {
    let n = sys.bodies.len();
    let mut u = 0.0;
    for i in 0..n {
        let bi = &sys.bodies[i];
        for bj in &sys.bodies[(i + 1)..] {
            let r = bj.x - bi.x;
            u -= g * bi.m * bj.m / (r.dot(&r) + eps2).sqrt();
        }
    }
    u
}

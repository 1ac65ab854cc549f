//! Fixed-step time integrators for the N-body system
//!
//! Provides a kick-drift-kick (velocity Verlet / leapfrog) step and a cheaper
//! Euler-like step, both driven by an `AccelSet` and a caller-chosen `dt`

use serde::Deserialize;

use super::forces::AccelSet;
use super::states::System;

/// Which integration scheme advances the system
/// `integrator: "verlet"` (alias `"leapfrog"`) or `integrator: "euler"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    // Kick-drift-kick. Symplectic and time-reversible, good long-term energy behavior
    #[serde(rename = "verlet", alias = "leapfrog")]
    Verlet,

    // v += a dt, then x += v dt. Cheap, drifts in energy; fine for visual pacing
    #[serde(rename = "euler")]
    Euler,
}

/// Advance the system by one step with the selected scheme
pub fn step<const D: usize>(kind: IntegratorConfig, sys: &mut System<D>, forces: &AccelSet<D>, dt: f64) {
    match kind {
        IntegratorConfig::Verlet => verlet_integrator(sys, forces, dt),
        IntegratorConfig::Euler => euler_integrator(sys, forces, dt),
    }
}

/// Advance the system by one step using kick-drift-kick.
///
/// Expects `body.a` to hold the accelerations at the current positions (the
/// result of the previous step, or of priming with [`AccelSet::apply`]).
/// Uses one force evaluation per step and leaves `body.a` valid for the next.
pub fn verlet_integrator<const D: usize>(sys: &mut System<D>, forces: &AccelSet<D>, dt: f64) {
    if sys.bodies.is_empty() { // no bodies, only time advances
        sys.t += dt;
        return;
    }
    let half_dt = 0.5 * dt;

    // Kick: v_n+1/2 = v_n + (dt/2) a_n
    // Drift: x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.v += half_dt * b.a;
        b.x += dt * b.v;
    }

    // t_n+1 = t_n + dt
    sys.t += dt;

    // a_n+1 from x_n+1
    forces.apply(sys);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    for b in sys.bodies.iter_mut() {
        b.v += half_dt * b.a;
    }
}

/// Advance the system by one step with the Euler-like update.
/// Accelerations come from the current positions; velocity is updated first
/// and the new velocity moves the position. No final velocity correction.
pub fn euler_integrator<const D: usize>(sys: &mut System<D>, forces: &AccelSet<D>, dt: f64) {
    forces.apply(sys);

    for b in sys.bodies.iter_mut() {
        b.v += dt * b.a;
        b.x += dt * b.v;
    }

    sys.t += dt;
}

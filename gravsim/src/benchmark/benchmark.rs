use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{Acceleration, NewtonianGravity, ParallelNewtonianGravity};
use crate::simulation::integrator::IntegratorConfig;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body3, NVec3, System3};

/// Helper to build a manual system of size `n`
fn make_system3(n: usize) -> System3 {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        bodies.push(Body3::new(x, NVec3::zeros(), 1.0));
    }

    // positive unit masses and finite positions
    System3::new(bodies).unwrap_or_else(|e| unreachable!("benchmark system invalid: {e}"))
}

/// Shared parameter template
fn make_params() -> Parameters {
    Parameters::new(0.001, 0.01, 0.1, 100)
        .unwrap_or_else(|e| unreachable!("benchmark parameters invalid: {e}"))
}

/// Time one force evaluation: direct pair sum vs rayon per-body sum
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let params = make_params();

    for n in ns {
        let sys = make_system3(n);
        let mut out = vec![NVec3::zeros(); n];

        let direct = NewtonianGravity { g: params.g(), eps2: params.eps2() };
        let parallel = ParallelNewtonianGravity { g: params.g(), eps2: params.eps2() };

        // Warm up
        direct.acceleration(0.0, &sys, &mut out);
        parallel.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        direct.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        parallel.acceleration(0.0, &sys, &mut out);
        let dt_parallel = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s, parallel = {:8.6} s", dt_direct, dt_parallel);
    }
}

/// Time a full step for each integrator
pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 5;

    for n in ns {
        let mut per_step = Vec::new();
        for integrator in [IntegratorConfig::Verlet, IntegratorConfig::Euler] {
            let mut scenario = Scenario::new(make_system3(n), make_params(), Engine::new(integrator));

            // Warm-up
            scenario.step();

            let t0 = Instant::now();
            for _ in 0..steps {
                scenario.step();
            }
            per_step.push(t0.elapsed().as_secs_f64() / steps as f64);
        }
        println!("N = {:5}, verlet step = {:8.6} s, euler step = {:8.6} s", n, per_step[0], per_step[1]);
    }
}

/// Per-step cost of the direct and parallel strategies over a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,direct_ms,parallel_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut ms = [0.0; 2];
        for (slot, parallel) in [false, true].into_iter().enumerate() {
            let engine = Engine::new(IntegratorConfig::Verlet).parallel(parallel);
            let mut scenario = Scenario::new(make_system3(n), make_params(), engine);

            let t0 = Instant::now();
            for _ in 0..steps {
                scenario.step();
            }
            ms[slot] = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        }

        println!("{},{:.6},{:.6}", n, ms[0], ms[1]);
    }
}

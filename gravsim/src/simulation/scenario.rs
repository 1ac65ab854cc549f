//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario<D>` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System<D>` with bodies at t = 0, accelerations primed)
//! - active force set (`AccelSet<D>`)
//!
//! Stepping through a scenario keeps `body.a` consistent with the positions.
//! The bare integrators in `integrator` expect the caller to prime it with
//! `AccelSet::apply` first.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::configuration::config::{check_range, RandomBodiesConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator;
use crate::simulation::params::{check_time_step, Parameters};
use crate::simulation::states::{Body, NVec, System};

pub struct Scenario<const D: usize> {
    pub name: String,
    engine: Engine,
    parameters: Parameters,
    pub labels: Vec<Option<String>>, // per-body labels from the config, same order as the bodies
    system: System<D>,
    forces: AccelSet<D>,
    steps_taken: usize,
}

impl<const D: usize> Scenario<D> {
    /// Wrap a validated system and prime its accelerations so the first
    /// kick-drift-kick step starts from a consistent state
    pub fn new(mut system: System<D>, parameters: Parameters, engine: Engine) -> Self {
        let forces = engine.forces::<D>(&parameters);
        forces.apply(&mut system);
        let labels = vec![None; system.len()];
        Self {
            name: String::from("unnamed"),
            engine,
            parameters,
            labels,
            system,
            forces,
            steps_taken: 0,
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let expected = cfg.engine.dimension.components();
        if expected != D {
            return Err(ConfigError::ScenarioDimension { expected: D, found: expected });
        }
        let parameters = cfg.parameters.to_parameters()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut bodies: Vec<Body<D>> = cfg.bodies.iter().map(|bc| {
            Body::new(NVec::<D>::from_column_slice(&bc.x), NVec::<D>::from_column_slice(&bc.v), bc.m)
        }).collect();
        let mut labels: Vec<Option<String>> = cfg.bodies.iter().map(|bc| bc.label.clone()).collect();

        let mut zero_momentum = false;
        if let Some(random) = &cfg.random {
            bodies.extend(sample_bodies::<D>(random)?);
            labels.resize(bodies.len(), None);
            zero_momentum = random.zero_momentum;
        }

        let mut system = System::new(bodies)?;
        if zero_momentum {
            system.zero_momentum();
        }

        let engine = Engine::new(cfg.engine.integrator).parallel(cfg.engine.parallel);
        let mut scenario = Self::new(system, parameters, engine);
        scenario.name = cfg.name.unwrap_or_else(|| String::from("unnamed"));
        scenario.labels = labels;

        info!(
            "built scenario '{}': {} bodies, {:?}, dt = {}, G = {}, softening = {}",
            scenario.name,
            scenario.system.len(),
            scenario.engine.integrator,
            scenario.parameters.dt(),
            scenario.parameters.g(),
            scenario.parameters.softening(),
        );
        Ok(scenario)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn system(&self) -> &System<D> {
        &self.system
    }

    pub fn forces(&self) -> &AccelSet<D> {
        &self.forces
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Advance one step with the configured `dt`
    pub fn step(&mut self) {
        integrator::step(self.engine.integrator, &mut self.system, &self.forces, self.parameters.dt());
        self.steps_taken += 1;
    }

    /// Advance one step with a caller-supplied `dt`, e.g. a frame time.
    /// The state is untouched if `dt` is rejected.
    pub fn step_with(&mut self, dt: f64) -> Result<(), ConfigError> {
        check_time_step(dt)?;
        integrator::step(self.engine.integrator, &mut self.system, &self.forces, dt);
        self.steps_taken += 1;
        Ok(())
    }

    /// Run `steps` steps, calling `on_step(index, system)` after each one
    pub fn run<F>(&mut self, steps: usize, mut on_step: F)
    where
        F: FnMut(usize, &System<D>),
    {
        for i in 0..steps {
            self.step();
            on_step(i, &self.system);
        }
    }

    /// Insert a body between steps; its acceleration is computed immediately
    pub fn add_body(&mut self, body: Body<D>, label: Option<String>) -> Result<(), ConfigError> {
        self.system.push(body)?;
        self.labels.push(label);
        self.forces.apply(&mut self.system);
        Ok(())
    }

    /// Remove a body between steps, refreshing the remaining accelerations
    pub fn remove_body(&mut self, index: usize) -> Option<Body<D>> {
        let body = self.system.remove(index)?;
        if index < self.labels.len() {
            self.labels.remove(index);
        }
        self.forces.apply(&mut self.system);
        Some(body)
    }
}

/// Draw `count` bodies with uniform positions and velocities from a seeded generator.
/// Components are drawn in order x, then v, body by body, so the same seed always
/// produces the same bodies.
pub fn sample_bodies<const D: usize>(cfg: &RandomBodiesConfig) -> Result<Vec<Body<D>>, ConfigError> {
    check_range("position", cfg.position)?;
    check_range("velocity", cfg.velocity)?;

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let pos = Uniform::new(cfg.position[0], cfg.position[1]);
    let vel = Uniform::new(cfg.velocity[0], cfg.velocity[1]);

    debug!("sampling {} bodies with seed {}", cfg.count, cfg.seed);
    let bodies = (0..cfg.count)
        .map(|_| {
            let x = NVec::<D>::from_fn(|_, _| pos.sample(&mut rng));
            let v = NVec::<D>::from_fn(|_, _| vel.sample(&mut rng));
            Body::new(x, v, cfg.mass)
        })
        .collect();
    Ok(bodies)
}

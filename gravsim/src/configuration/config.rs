//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]       – dimension, integrator and force strategy
//! - [`ParametersConfig`]   – numerical parameters and physical constants
//! - [`BodyConfig`]         – initial state for each literal body
//! - [`RandomBodiesConfig`] – seeded uniform sampling of extra bodies
//! - [`ScenarioConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 3D scenario YAML matching these types:
//!
//! ```yaml
//! name: cluster
//! engine:
//!   dimension: 3d           # 2d or 3d
//!   integrator: verlet      # or euler
//!   parallel: false
//!
//! parameters:
//!   dt: 0.01                # fixed step size
//!   softening: 0.1          # softening length
//!   G: 1.0                  # gravitational constant
//!   steps: 100              # batch run length
//!   report_every: 20
//!
//! random:
//!   count: 100
//!   seed: 42
//!   mass: 1.0
//!   position: [-10.0, 10.0]
//!   velocity: [-0.1, 0.1]
//! ```
//!
//! The engine then maps this configuration into its runtime `Scenario`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::integrator::IntegratorConfig;
use crate::simulation::params::Parameters;

/// Spatial dimension of a scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    #[serde(rename = "2d")]
    Two,
    #[serde(rename = "3d")]
    Three,
}

impl Dimension {
    pub fn components(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub dimension: Dimension,          // number of spatial components per vector
    pub integrator: IntegratorConfig,  // time integrator used for advancing the system state
    #[serde(default)]
    pub parallel: bool,                // `true` - rayon force evaluation, `false` - direct pair sum
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,        // time step size
    pub softening: f64, // softening length - prevents singular forces at very small separations
    #[serde(rename = "G")]
    pub g: f64,         // gravitational constant
    #[serde(default = "default_steps")]
    pub steps: usize,   // batch run length
    #[serde(default = "default_report_every")]
    pub report_every: usize, // print diagnostics every n steps
}

fn default_steps() -> usize {
    100
}

fn default_report_every() -> usize {
    20
}

impl ParametersConfig {
    pub fn to_parameters(&self) -> Result<Parameters, ConfigError> {
        if self.report_every == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }
        Parameters::new(self.dt, self.softening, self.g, self.steps)
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in simulation units
    pub v: Vec<f64>, // initial velocity in simulation units per time unit
    pub m: f64,      // mass of the body
    #[serde(default)]
    pub label: Option<String>,
}

/// Uniformly sampled bodies drawn from a seeded generator
#[derive(Deserialize, Debug, Clone)]
pub struct RandomBodiesConfig {
    pub count: usize,
    pub seed: u64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    pub position: [f64; 2], // [low, high) per component
    pub velocity: [f64; 2], // [low, high) per component
    #[serde(default)]
    pub zero_momentum: bool,
}

fn default_mass() -> f64 {
    1.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,          // literal bodies, placed first
    #[serde(default)]
    pub random: Option<RandomBodiesConfig>, // sampled bodies, appended after the literal ones
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text).context("failed to parse scenario YAML")?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Check everything that does not depend on the runtime dimension
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.to_parameters()?;

        let random_count = self.random.as_ref().map_or(0, |r| r.count);
        if self.bodies.is_empty() && random_count == 0 {
            return Err(ConfigError::NoBodies);
        }

        let d = self.engine.dimension.components();
        for (index, bc) in self.bodies.iter().enumerate() {
            for found in [bc.x.len(), bc.v.len()] {
                if found != d {
                    return Err(ConfigError::DimensionMismatch { index, expected: d, found });
                }
            }
            if !(bc.m.is_finite() && bc.m > 0.0) {
                return Err(ConfigError::NonPositiveMass { index, mass: bc.m });
            }
        }

        if let Some(r) = &self.random {
            if !(r.mass.is_finite() && r.mass > 0.0) {
                return Err(ConfigError::NonPositiveMass { index: self.bodies.len(), mass: r.mass });
            }
            check_range("position", r.position)?;
            check_range("velocity", r.velocity)?;
        }
        Ok(())
    }
}

/// A sampling range must be non-empty with a finite width
pub(crate) fn check_range(what: &'static str, [low, high]: [f64; 2]) -> Result<(), ConfigError> {
    if low.is_finite() && high.is_finite() && low < high && (high - low).is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { what, low, high })
    }
}

//! Named scenarios
//!
//! Two conventions for the same force law:
//! - scaled units, where `G` is picked for visual pacing (`solar-system`)
//!   or simply set to 1 (`cluster`)
//! - physical SI units with the real `G` (`earth-sun`)

use clap::ValueEnum;

use crate::configuration::config::{
    BodyConfig, Dimension, EngineConfig, ParametersConfig, RandomBodiesConfig, ScenarioConfig,
};
use crate::simulation::integrator::IntegratorConfig;
use crate::simulation::params::G_SI;

/// Scaled gravitational constant for the real-time solar system demo
pub const G_VISUAL: f64 = 40.0;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 100 equal masses sampled with seed 42, leapfrog, batch output
    Cluster,
    /// Sun and four planets on circular orbits, Euler, scaled G
    SolarSystem,
    /// Sun and Earth in SI units, leapfrog, one hour steps
    EarthSun,
}

impl Preset {
    pub fn config(self) -> ScenarioConfig {
        match self {
            Preset::Cluster => cluster(),
            Preset::SolarSystem => solar_system(),
            Preset::EarthSun => earth_sun(),
        }
    }
}

/// Speed of a circular orbit of radius `r` around a mass `m_central`
/// under the softened force law
pub fn circular_velocity(g: f64, m_central: f64, r: f64, softening: f64) -> f64 {
    let d2 = r * r + softening * softening;
    (g * m_central * r * r / (d2 * d2.sqrt())).sqrt()
}

pub fn cluster() -> ScenarioConfig {
    ScenarioConfig {
        name: Some(String::from("cluster")),
        engine: EngineConfig {
            dimension: Dimension::Three,
            integrator: IntegratorConfig::Verlet,
            parallel: false,
        },
        parameters: ParametersConfig {
            dt: 0.01,
            softening: 0.1,
            g: 1.0,
            steps: 100,
            report_every: 20,
        },
        bodies: Vec::new(),
        random: Some(RandomBodiesConfig {
            count: 100,
            seed: 42,
            mass: 1.0,
            position: [-10.0, 10.0],
            velocity: [-0.1, 0.1],
            zero_momentum: false,
        }),
    }
}

pub fn solar_system() -> ScenarioConfig {
    let softening = 1.0;
    let sun_mass = 30_000.0;

    let mut bodies = vec![BodyConfig {
        x: vec![0.0, 0.0],
        v: vec![0.0, 0.0],
        m: sun_mass,
        label: Some(String::from("Sun")),
    }];
    for (label, r, m) in [("Mercury", 120.0, 8.0), ("Venus", 200.0, 15.0), ("Earth", 300.0, 18.0), ("Mars", 420.0, 10.0)] {
        bodies.push(BodyConfig {
            x: vec![r, 0.0],
            v: vec![0.0, circular_velocity(G_VISUAL, sun_mass, r, softening)],
            m,
            label: Some(String::from(label)),
        });
    }

    ScenarioConfig {
        name: Some(String::from("solar-system")),
        engine: EngineConfig {
            dimension: Dimension::Two,
            integrator: IntegratorConfig::Euler,
            parallel: false,
        },
        parameters: ParametersConfig {
            dt: 1.0 / 60.0,
            softening,
            g: G_VISUAL,
            steps: 600,
            report_every: 60,
        },
        bodies,
        random: None,
    }
}

pub fn earth_sun() -> ScenarioConfig {
    let sun_mass = 1.989e30; // kg
    let earth_mass = 5.972e24; // kg
    let au = 1.496e11; // m
    let softening = 1.0e3; // m

    ScenarioConfig {
        name: Some(String::from("earth-sun")),
        engine: EngineConfig {
            dimension: Dimension::Three,
            integrator: IntegratorConfig::Verlet,
            parallel: false,
        },
        parameters: ParametersConfig {
            dt: 3600.0,
            softening,
            g: G_SI,
            steps: 24 * 365,
            report_every: 24 * 30,
        },
        bodies: vec![
            BodyConfig {
                x: vec![0.0, 0.0, 0.0],
                v: vec![0.0, 0.0, 0.0],
                m: sun_mass,
                label: Some(String::from("Sun")),
            },
            BodyConfig {
                x: vec![au, 0.0, 0.0],
                v: vec![0.0, circular_velocity(G_SI, sun_mass + earth_mass, au, softening), 0.0],
                m: earth_mass,
                label: Some(String::from("Earth")),
            },
        ],
        random: None,
    }
}

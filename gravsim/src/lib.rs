pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::ConfigError;

pub use simulation::states::{Body, System, NVec, NVec2, NVec3, Body2, Body3, System2, System3};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, ParallelNewtonianGravity};
pub use simulation::integrator::{IntegratorConfig, euler_integrator, verlet_integrator};
pub use simulation::diagnostics::{center_of_mass, kinetic_energy, total_energy, total_momentum, Snapshot};
pub use simulation::scenario::Scenario;
pub use simulation::report::{run_batch, Reporter};

pub use configuration::config::{Dimension, EngineConfig, ParametersConfig, BodyConfig, RandomBodiesConfig, ScenarioConfig};
pub use configuration::presets::Preset;

pub use visualization::{trail::Trail, sprite::{Motion, Rgba, Sprite}, viewer::{ViewState, Viewer}};

pub use benchmark::benchmark::{bench_gravity, bench_step, bench_step_curve};

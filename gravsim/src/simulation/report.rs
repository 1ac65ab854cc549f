//! Batch-mode reporter: runs a scenario and prints the center of mass
//! every `every` steps with fixed decimal precision.

use std::io::Write;

use log::warn;

use crate::error::ConfigError;
use crate::simulation::diagnostics::center_of_mass;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    every: usize,
    precision: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self { every: 20, precision: 4 }
    }
}

impl Reporter {
    pub fn new(every: usize, precision: usize) -> Result<Self, ConfigError> {
        if every == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }
        Ok(Self { every, precision })
    }

    pub fn every(&self) -> usize {
        self.every
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn header(&self, n: usize) -> String {
        format!("N-Body Simulation (N={n})")
    }

    pub fn line<const D: usize>(&self, step: usize, com: Option<&NVec<D>>) -> String {
        let coords = match com {
            Some(c) => c
                .iter()
                .map(|x| format!("{:.*}", self.precision, x))
                .collect::<Vec<_>>()
                .join(", "),
            None => String::from("n/a"),
        };
        format!("Step {step} | Center of Mass: ({coords})")
    }

    pub fn should_report(&self, step: usize) -> bool {
        step % self.every == 0
    }
}

/// Step `scenario` `steps` times, writing the header and a line after every
/// reported step. A non-finite state is logged once and the run continues.
pub fn run_batch<const D: usize, W: Write>(
    scenario: &mut Scenario<D>,
    steps: usize,
    reporter: &Reporter,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "{}", reporter.header(scenario.system().len()))?;

    let mut warned = false;
    for i in 0..steps {
        scenario.step();

        if !warned && !scenario.system().is_finite() {
            warn!("state became non-finite at step {i}; consider a smaller dt or larger softening");
            warned = true;
        }

        if reporter.should_report(i) {
            let com = center_of_mass(scenario.system());
            writeln!(out, "{}", reporter.line(i, com.as_ref()))?;
        }
    }
    Ok(())
}

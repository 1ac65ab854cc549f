//! Headless frame driver for a real-time presentation layer
//!
//! A renderer owns a [`ViewState`] and a [`Viewer`], calls
//! [`Viewer::frame`] once per frame with the frame time, then draws
//! [`Viewer::sprites`]. Window, input and text handling stay with the renderer.

use crate::configuration::presets::solar_system;
use crate::error::ConfigError;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec;
use crate::visualization::sprite::{Motion, Rgba, Sprite};
use crate::visualization::trail::DEFAULT_TRAIL_LEN;

/// Caller-owned UI state, passed into every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub paused: bool,
    pub trails: bool,
    pub time_scale: f64, // simulated time per second of frame time
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            paused: false,
            trails: true,
            time_scale: 1.0,
        }
    }
}

impl ViewState {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

pub struct Viewer<const D: usize> {
    scenario: Scenario<D>,
    sprites: Vec<Sprite<D>>,
}

impl<const D: usize> Viewer<D> {
    /// One white sprite with a trail per simulated body, labelled from the scenario
    pub fn new(scenario: Scenario<D>) -> Self {
        let sprites = scenario
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let label = label.clone().unwrap_or_else(|| format!("body {i}"));
                Sprite::new(label, 4.0, Rgba::WHITE, Motion::Simulated { body: i })
                    .with_trail(DEFAULT_TRAIL_LEN)
            })
            .collect();
        Self { scenario, sprites }
    }

    /// Build with an explicit sprite list
    pub fn with_sprites(scenario: Scenario<D>, sprites: Vec<Sprite<D>>) -> Self {
        Self { scenario, sprites }
    }

    pub fn add_sprite(&mut self, sprite: Sprite<D>) {
        self.sprites.push(sprite);
    }

    pub fn scenario(&self) -> &Scenario<D> {
        &self.scenario
    }

    pub fn sprites(&self) -> &[Sprite<D>] {
        &self.sprites
    }

    /// Advance one frame. Nothing moves while paused; otherwise physics and
    /// decorative motion advance by `frame_dt * time_scale` and trails record
    /// the new positions.
    pub fn frame(&mut self, state: &ViewState, frame_dt: f64) -> Result<(), ConfigError> {
        if state.paused {
            return Ok(());
        }
        let dt = frame_dt * state.time_scale;
        self.scenario.step_with(dt)?;

        let system = self.scenario.system();
        for sprite in self.sprites.iter_mut() {
            sprite.advance(dt);
            if !state.trails {
                continue;
            }
            if let (Some(p), Some(trail)) = (sprite.position(system), sprite.trail.as_mut()) {
                trail.push(p);
            }
        }
        Ok(())
    }

    pub fn reset_trails(&mut self) {
        for trail in self.sprites.iter_mut().filter_map(|s| s.trail.as_mut()) {
            trail.clear();
        }
    }

    /// Label and position of every sprite that currently has one
    pub fn positions(&self) -> Vec<(&str, NVec<D>)> {
        let system = self.scenario.system();
        self.sprites
            .iter()
            .filter_map(|s| s.position(system).map(|p| (s.label.as_str(), p)))
            .collect()
    }
}

impl Viewer<2> {
    /// Sun and four planets from the `solar-system` preset; the sun draws no trail
    pub fn solar_system() -> Result<Self, ConfigError> {
        let scenario = Scenario::<2>::build_scenario(solar_system())?;
        let looks = [
            (40.0, Rgba::YELLOW),
            (10.0, Rgba::GRAY),
            (16.0, Rgba::ORANGE),
            (16.0, Rgba::BLUE),
            (12.0, Rgba::RED),
        ];
        let sprites = scenario
            .labels
            .iter()
            .zip(looks)
            .enumerate()
            .map(|(i, (label, (radius, color)))| {
                let sprite = Sprite::new(
                    label.clone().unwrap_or_default(),
                    radius,
                    color,
                    Motion::Simulated { body: i },
                );
                if i == 0 { sprite } else { sprite.with_trail(DEFAULT_TRAIL_LEN) }
            })
            .collect();
        Ok(Self::with_sprites(scenario, sprites))
    }
}

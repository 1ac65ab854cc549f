//! Drawable bodies for a presentation layer
//!
//! A sprite bundles what a renderer needs (label, radius, color, trail) with
//! a [`Motion`] that says where it is. Simulated sprites follow a body in the
//! physics system; decorative ones move on their own and never feed back
//! into the physics.

use crate::simulation::states::{NVec, System};
use crate::visualization::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const YELLOW: Rgba = Rgba(253, 249, 0, 255);
    pub const GRAY: Rgba = Rgba(130, 130, 130, 255);
    pub const ORANGE: Rgba = Rgba(255, 161, 0, 255);
    pub const BLUE: Rgba = Rgba(0, 121, 241, 255);
    pub const RED: Rgba = Rgba(230, 41, 55, 255);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Motion<const D: usize> {
    /// Follows body `body` of the simulated system
    Simulated { body: usize },
    /// Circle of radius `distance` around `center` in the x-y plane
    FixedOrbit {
        center: NVec<D>,
        distance: f64,
        angular_speed: f64, // rad per time unit
        angle: f64,
    },
    Static { position: NVec<D> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<const D: usize> {
    pub label: String,
    pub radius: f32,
    pub color: Rgba,
    pub motion: Motion<D>,
    pub trail: Option<Trail<D>>,
}

impl<const D: usize> Sprite<D> {
    pub fn new(label: impl Into<String>, radius: f32, color: Rgba, motion: Motion<D>) -> Self {
        Self {
            label: label.into(),
            radius,
            color,
            motion,
            trail: None,
        }
    }

    pub fn with_trail(mut self, capacity: usize) -> Self {
        self.trail = Some(Trail::new(capacity));
        self
    }

    /// Current position, `None` if a simulated sprite points past the end of `sys`
    pub fn position(&self, sys: &System<D>) -> Option<NVec<D>> {
        match &self.motion {
            Motion::Simulated { body } => sys.bodies().get(*body).map(|b| b.x),
            Motion::FixedOrbit { center, distance, angle, .. } => {
                let mut p = *center;
                p[0] += distance * angle.cos();
                p[1] += distance * angle.sin();
                Some(p)
            }
            Motion::Static { position } => Some(*position),
        }
    }

    /// Advance non-physical motion by `dt`
    pub fn advance(&mut self, dt: f64) {
        if let Motion::FixedOrbit { angular_speed, angle, .. } = &mut self.motion {
            *angle += *angular_speed * dt;
        }
    }
}

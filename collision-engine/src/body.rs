use crate::{ EngineResult, InvalidBodySnafu };

use std::f32::consts::PI;

use glam::Vec2;
use snafu::{ ensure, OptionExt as _ };
use typed_floats::tf32::StrictlyPositiveFinite;

/// A circular rigid body.
///
/// Mass and radius are stored as strictly positive finite floats so a body
/// with a zero or negative mass cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    mass: StrictlyPositiveFinite,
    radius: StrictlyPositiveFinite,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, mass: f32, radius: f32) -> EngineResult<Self> {
        ensure!(pos.is_finite(), InvalidBodySnafu { field: "position", value: pos.to_string() });
        ensure!(vel.is_finite(), InvalidBodySnafu { field: "velocity", value: vel.to_string() });

        let mass = StrictlyPositiveFinite::new(mass).ok()
            .context(InvalidBodySnafu { field: "mass", value: mass.to_string() })?;
        let radius = StrictlyPositiveFinite::new(radius).ok()
            .context(InvalidBodySnafu { field: "radius", value: radius.to_string() })?;

        Ok(Self { pos, vel, mass, radius })
    }

    /// Mass derived from an area density (`density * pi * r^2`)
    pub fn from_density(pos: Vec2, vel: Vec2, radius: f32, density: f32) -> EngineResult<Self> {
        Self::new(pos, vel, density * PI * radius * radius, radius)
    }

    pub fn at_rest(pos: Vec2, mass: f32, radius: f32) -> EngineResult<Self> {
        Self::new(pos, Vec2::ZERO, mass, radius)
    }

    pub fn mass(&self) -> f32 {
        self.mass.get()
    }

    pub fn radius(&self) -> f32 {
        self.radius.get()
    }

    pub fn inverse_mass(&self) -> f32 {
        1. / self.mass.get()
    }

    pub fn density(&self) -> f32 {
        self.mass() / (PI * self.radius() * self.radius())
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass() * self.vel.length_squared()
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius()
    }

    /// Points the velocity towards `target`, proportionally to how far it is.
    /// Used to drag a body around and fling it.
    pub fn follow(&mut self, target: Vec2, coefficient: f32) {
        self.vel = (target - self.pos) * coefficient;
    }
}

use crate::{ default, Body, EngineResult, Simulation, SimulationConfig };

use glam::Vec2;

pub struct WorldState {
    pub(crate) config: SimulationConfig,
    pub(crate) bodies: Vec<Body>,
}

impl WorldState {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            bodies: default(),
        }
    }

    /// An unbounded world with the default settings
    pub fn unbounded() -> Self {
        Self::new(SimulationConfig {
            walls: false,
            ..default()
        })
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn push_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Index of the first body under the given point
    pub fn body_at(&self, point: Vec2) -> Option<usize> {
        self.bodies.iter().position(|body| body.contains_point(point))
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Validates the config and starts a simulation from this state
    pub fn into_simulation(self) -> EngineResult<Simulation> {
        Simulation::new(self)
    }
}

use std::ops::ControlFlow;

use collision_engine::{ Body, EngineResult, FrameInfo, Renderer, WorldState };
use macroquad::math::Vec2;

/// Logs the conserved quantities instead of drawing anything
pub struct LogRenderer {
    /// Log every `interval` frames
    pub interval: u64,
    collisions: usize,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            collisions: 0,
        }
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, bodies: &[Body], frame: &FrameInfo) -> ControlFlow<()> {
        self.collisions += frame.report.collisions;
        if frame.frame % self.interval == 0 {
            let energy: f32 = bodies.iter().map(Body::kinetic_energy).sum();
            let momentum: Vec2 = bodies.iter().map(Body::momentum).sum();
            tracing::info!(
                frame = frame.frame,
                time = frame.time,
                energy,
                momentum = %momentum,
                collisions = self.collisions,
                "totals",
            );
        }
        ControlFlow::Continue(())
    }
}

/// Simulates `frames` frames without opening a window
pub fn run(world_state: WorldState, frames: u64, dt: f32) -> EngineResult<()> {
    tracing::info!(
        bodies = world_state.bodies().len(),
        energy = world_state.total_kinetic_energy(),
        momentum = %world_state.total_momentum(),
        "starting headless run",
    );

    let mut simulation = world_state.into_simulation()?;
    let mut renderer = LogRenderer::new(60);
    simulation.run(frames, dt, &mut renderer);

    let world_state = simulation.world_state();
    tracing::info!(
        collisions = renderer.collisions(),
        energy = world_state.total_kinetic_energy(),
        momentum = %world_state.total_momentum(),
        "done",
    );
    Ok(())
}

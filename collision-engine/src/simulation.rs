use crate::{
    default, find_overlapping_pairs, is_approaching, is_overlapping, nudge_apart, separate, Body,
    CollisionResolver, ElasticResolver, EngineResult, RestitutionResolver, WorldState,
};

use std::ops::ControlFlow;

/// What happened during a single step
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub collisions: usize,
    pub wall_bounces: usize,
    /// Pairs whose centers were too close and had to be nudged apart
    pub nudges: usize,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct FrameInfo {
    pub frame: u64,
    pub time: f32,
    pub report: StepReport,
}

/// Whatever displays the bodies, called once per frame
pub trait Renderer {
    /// Returning `Break` stops the simulation
    fn draw(&mut self, bodies: &[Body], frame: &FrameInfo) -> ControlFlow<()>;
}

pub struct Simulation {
    world_state: WorldState,
    resolver: Box<dyn CollisionResolver>,
    time: f32,
    frame: u64,
    last_report: StepReport,
}

impl Simulation {
    /// Uses an elastic resolver, or a restitution one if the config asks
    /// for energy loss on impact. Fails if the config is invalid.
    pub fn new(world_state: WorldState) -> EngineResult<Self> {
        world_state.config.validate()?;
        let restitution = world_state.config.restitution;
        let resolver: Box<dyn CollisionResolver> = if restitution < 1. {
            Box::new(RestitutionResolver::new(restitution))
        } else {
            Box::new(ElasticResolver)
        };

        Ok(Self {
            world_state,
            resolver,
            time: 0.,
            frame: 0,
            last_report: default(),
        })
    }

    pub fn with_resolver(mut self, resolver: impl CollisionResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn world_state(&self) -> &WorldState {
        &self.world_state
    }

    pub fn world_state_mut(&mut self) -> &mut WorldState {
        &mut self.world_state
    }

    pub fn bodies(&self) -> &[Body] {
        self.world_state.bodies()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances the simulation by `dt`: moves every body, bounces them off
    /// the walls, then resolves every overlapping pair
    pub fn step(&mut self, dt: f32) -> StepReport {
        let WorldState { config, bodies } = &mut self.world_state;
        let mut report: StepReport = default();

        for body in bodies.iter_mut() {
            body.vel += config.gravity * dt;
            body.vel *= config.drag;
            body.pos += body.vel * dt;
        }

        if config.walls {
            for body in bodies.iter_mut() {
                if bounce_off_walls(body, config.width, config.height, config.wall_restitution) {
                    report.wall_bounces += 1;
                }
            }
        }

        for (i, j) in find_overlapping_pairs(bodies) {
            let (a, b) = pair_mut(bodies.as_mut_slice(), i, j);
            // An earlier correction this step may already have split them
            if !is_overlapping(a, b) {
                continue;
            }

            if nudge_apart(a, b, config.min_separation) {
                tracing::warn!(i, j, "bodies {i} and {j} have coincident centers, nudging them apart");
                report.nudges += 1;
            }

            // A pair already moving apart only needs its positions fixed
            if is_approaching(a, b) {
                if let Err(error) = self.resolver.resolve(a, b) {
                    tracing::warn!(i, j, %error, "skipping collision");
                    continue;
                }
                tracing::debug!(i, j, vel_i = ?a.vel, vel_j = ?b.vel, "collision");
                report.collisions += 1;
            }

            if config.position_correction {
                if let Err(error) = separate(a, b, config.separation_slop) {
                    tracing::warn!(i, j, %error, "could not separate bodies");
                }
            }
        }

        self.time += dt;
        self.frame += 1;
        tracing::trace!(frame = self.frame, time = self.time, ?report, "step");

        self.last_report = report;
        report
    }

    pub fn frame_info(&self) -> FrameInfo {
        FrameInfo {
            frame: self.frame,
            time: self.time,
            report: self.last_report,
        }
    }

    /// Steps once and hands the result to the renderer
    pub fn advance<R: Renderer + ?Sized>(&mut self, dt: f32, renderer: &mut R) -> ControlFlow<()> {
        self.step(dt);
        self.redraw(renderer)
    }

    /// Draws the current state again without stepping, used while paused
    pub fn redraw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> ControlFlow<()> {
        renderer.draw(self.world_state.bodies(), &self.frame_info())
    }

    /// Runs up to `frames` frames, stopping early if the renderer asks to.
    /// Returns the number of frames that ran.
    pub fn run<R: Renderer + ?Sized>(&mut self, frames: u64, dt: f32, renderer: &mut R) -> u64 {
        let start_frame = self.frame;
        let start_instant = std::time::Instant::now();

        for _ in 0..frames {
            if self.advance(dt, renderer).is_break() {
                break;
            }
        }

        let ran = self.frame - start_frame;
        tracing::info!("ran {ran} frames (took {:?})", start_instant.elapsed());
        ran
    }
}

/// Reflects the body off any wall it went through and mirrors its position
/// back inside the world. Returns whether it bounced.
fn bounce_off_walls(body: &mut Body, width: f32, height: f32, restitution: f32) -> bool {
    let radius = body.radius();
    let bounced_x = bounce_on_axis(&mut body.pos.x, &mut body.vel.x, radius, width);
    let bounced_y = bounce_on_axis(&mut body.pos.y, &mut body.vel.y, radius, height);

    let bounced = bounced_x || bounced_y;
    if bounced {
        body.vel *= restitution;
    }
    bounced
}

/// Bounce between the walls at `0` and `extent` along one axis
fn bounce_on_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) -> bool {
    let (low, high) = (radius, extent - radius);
    // The mirror of a large overshoot can land past the opposite wall
    if *pos < low {
        *pos = (2. * low - *pos).min(high);
        *vel = vel.abs();
    } else if *pos > high {
        *pos = (2. * high - *pos).max(low);
        *vel = -vel.abs();
    } else {
        return false;
    }
    true
}

fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (head, tail) = slice.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

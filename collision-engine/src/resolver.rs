use crate::{ resolve_elastic, Body, CoincidentCentersSnafu, CollisionError };

use snafu::OptionExt as _;

/// Computes new velocities for a colliding pair. Never moves the bodies.
pub trait CollisionResolver {
    fn resolve(&self, a: &mut Body, b: &mut Body) -> Result<(), CollisionError>;
}

/// Perfectly elastic, frictionless collision
#[derive(Debug, Default, Clone, Copy)]
pub struct ElasticResolver;

impl CollisionResolver for ElasticResolver {
    fn resolve(&self, a: &mut Body, b: &mut Body) -> Result<(), CollisionError> {
        resolve_collision(a, b)
    }
}

/// Elastic resolution followed by a loss of speed on both bodies
#[derive(Debug, Clone, Copy)]
pub struct RestitutionResolver {
    /// In `[0, 1]`, 1 being elastic
    pub coefficient: f32,
}

impl RestitutionResolver {
    pub fn new(coefficient: f32) -> Self {
        debug_assert!((0. ..=1.).contains(&coefficient));
        Self { coefficient }
    }
}

impl CollisionResolver for RestitutionResolver {
    fn resolve(&self, a: &mut Body, b: &mut Body) -> Result<(), CollisionError> {
        resolve_collision(a, b)?;
        a.vel *= self.coefficient;
        b.vel *= self.coefficient;
        Ok(())
    }
}

/// Resolves an elastic collision in place.
///
/// On error (coincident centers) neither velocity is touched.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> Result<(), CollisionError> {
    let (vel_a, vel_b) = resolve_elastic(a.pos, a.vel, a.mass(), b.pos, b.vel, b.mass())
        .context(CoincidentCentersSnafu { distance: a.pos.distance(b.pos) })?;

    tracing::trace!(old_a = ?a.vel, old_b = ?b.vel, new_a = ?vel_a, new_b = ?vel_b, "resolved collision");

    a.vel = vel_a;
    b.vel = vel_b;
    Ok(())
}

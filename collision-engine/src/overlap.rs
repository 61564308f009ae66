use crate::{ collision_basis, Body, CoincidentCentersSnafu, CollisionError };

use glam::Vec2;
use itertools::Itertools;
use snafu::OptionExt as _;

/// Sum of the radii minus the distance between the centers.
/// Positive when the bodies overlap.
pub fn overlap_amount(a: &Body, b: &Body) -> f32 {
    (a.radius() + b.radius()) - a.pos.distance(b.pos)
}

pub fn is_overlapping(a: &Body, b: &Body) -> bool {
    overlap_amount(a, b) > 0.
}

/// Whether the centers are getting closer. A receding pair that still
/// overlaps must not be resolved again or it would bounce back into itself.
pub fn is_approaching(a: &Body, b: &Body) -> bool {
    (b.vel - a.vel).dot(b.pos - a.pos) < 0.
}

/// Every unordered pair of overlapping bodies, as `(i, j)` with `i < j`,
/// in lexicographic order
pub fn find_overlapping_pairs(bodies: &[Body]) -> Vec<(usize, usize)> {
    (0..bodies.len()).array_combinations::<2>()
        .filter(|&[i, j]| is_overlapping(&bodies[i], &bodies[j]))
        .map(|[i, j]| (i, j))
        .collect_vec()
}

/// Pushes two overlapping bodies apart along the collision normal so that
/// they end up `slop` away from touching.
///
/// The displacement is split by inverse mass so the center of mass of the
/// pair does not move. Velocities are not touched.
pub fn separate(a: &mut Body, b: &mut Body, slop: f32) -> Result<(), CollisionError> {
    let (normal, _) = collision_basis(a.pos, b.pos)
        .context(CoincidentCentersSnafu { distance: a.pos.distance(b.pos) })?;

    let correction = overlap_amount(a, b) + slop;
    if correction <= 0. {
        return Ok(());
    }

    let inv_mass_sum = a.inverse_mass() + b.inverse_mass();
    a.pos -= normal * (correction * a.inverse_mass() / inv_mass_sum);
    b.pos += normal * (correction * b.inverse_mass() / inv_mass_sum);
    Ok(())
}

/// Makes sure the centers are at least `min_separation` apart by moving
/// both bodies symmetrically, so that a collision normal always exists.
///
/// Returns whether the bodies had to be moved.
pub fn nudge_apart(a: &mut Body, b: &mut Body, min_separation: f32) -> bool {
    let delta_pos = b.pos - a.pos;
    let dist = delta_pos.length();
    if dist >= min_separation {
        return false;
    }

    // Exactly coincident centers have no direction to push along
    let direction = delta_pos.try_normalize().unwrap_or(Vec2::X);
    let half_push = (min_separation - dist) / 2.;
    a.pos -= direction * half_push;
    b.pos += direction * half_push;
    true
}

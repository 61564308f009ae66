use glam::Vec2;

/// Below this center distance the collision normal is considered undefined
pub const DEGENERATE_DISTANCE: f32 = f32::EPSILON;

/// Unit normal (pointing from `pos1` to `pos2`) and unit tangent of the
/// collision between two disks, or None if the centers coincide
pub fn collision_basis(pos1: Vec2, pos2: Vec2) -> Option<(Vec2, Vec2)> {
    let delta_pos = pos2 - pos1;
    let dist = delta_pos.length();
    if dist <= DEGENERATE_DISTANCE {
        return None;
    }

    let normal = delta_pos / dist;
    Some((normal, normal.perp()))
}

/// Newton's 1D elastic collision
pub fn elastic_1d(v1: f32, mass1: f32, v2: f32, mass2: f32) -> (f32, f32) {
    // Only the mass ratio matters, scaled so the sum cannot overflow
    let scale = mass1.max(mass2);
    let (m1, m2) = (mass1 / scale, mass2 / scale);
    let mass_sum = m1 + m2;
    (
        (v1 * (m1 - m2) + 2. * m2 * v2) / mass_sum,
        (v2 * (m2 - m1) + 2. * m1 * v1) / mass_sum,
    )
}

/// Post-collision velocities of two disks.
///
/// Both velocities are split into a normal part (along the line between
/// the centers) and a tangential part. Only the normal parts exchange
/// momentum, using [`elastic_1d`], the tangential parts are kept as is.
///
/// Returns None when the centers coincide.
pub fn resolve_elastic(
    pos1: Vec2,
    vel1: Vec2,
    mass1: f32,
    pos2: Vec2,
    vel2: Vec2,
    mass2: f32,
) -> Option<(Vec2, Vec2)> {
    let (normal, tangent) = collision_basis(pos1, pos2)?;

    let v1n = vel1.dot(normal);
    let v1t = vel1.dot(tangent);
    let v2n = vel2.dot(normal);
    let v2t = vel2.dot(tangent);

    let (v1n_new, v2n_new) = elastic_1d(v1n, mass1, v2n, mass2);

    Some((
        normal * v1n_new + tangent * v1t,
        normal * v2n_new + tangent * v2t,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    fn momentum(m1: f32, v1: Vec2, m2: f32, v2: Vec2) -> Vec2 {
        v1 * m1 + v2 * m2
    }

    fn energy(m1: f32, v1: Vec2, m2: f32, v2: Vec2) -> f32 {
        0.5 * m1 * v1.length_squared() + 0.5 * m2 * v2.length_squared()
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let (n, t) = collision_basis(Vec2::new(1., 1.), Vec2::new(4., 5.)).unwrap();
        assert_close(n.length(), 1.);
        assert_close(t.length(), 1.);
        assert_close(n.dot(t), 0.);
        assert_close(n.x, 0.6);
        assert_close(n.y, 0.8);
    }

    #[test]
    fn test_basis_coincident_centers() {
        assert!(collision_basis(Vec2::new(3., 3.), Vec2::new(3., 3.)).is_none());
        assert!(resolve_elastic(Vec2::ONE, Vec2::X, 1., Vec2::ONE, Vec2::Y, 1.).is_none());
    }

    #[test]
    fn test_elastic_1d_conserves_momentum_and_energy() {
        let cases = [
            (3., 2., -1., 5.),
            (0., 1., 4., 10.),
            (-7., 0.5, 2., 0.25),
        ];
        for (v1, m1, v2, m2) in cases {
            let (v1n, v2n) = elastic_1d(v1, m1, v2, m2);
            assert_close(m1 * v1 + m2 * v2, m1 * v1n + m2 * v2n);
            assert_close(0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2, 0.5 * m1 * v1n * v1n + 0.5 * m2 * v2n * v2n);
        }
    }

    #[test]
    fn test_equal_masses_swap_normal_components() {
        let (v1n, v2n) = elastic_1d(3., 4., -2., 4.);
        assert_close(v1n, -2.);
        assert_close(v2n, 3.);
    }

    #[test]
    fn test_newtons_cradle() {
        let (v1, v2) = resolve_elastic(
            Vec2::new(0., 0.), Vec2::new(5., 0.), 1.,
            Vec2::new(1.5, 0.), Vec2::ZERO, 1.,
        ).unwrap();
        assert_close(v1.x, 0.);
        assert_close(v1.y, 0.);
        assert_close(v2.x, 5.);
        assert_close(v2.y, 0.);
    }

    #[test]
    fn test_huge_masses_stay_finite() {
        let (v1n, v2n) = elastic_1d(3., f32::MAX, -2., f32::MAX);
        assert_close(v1n, -2.);
        assert_close(v2n, 3.);

        let (v1n, v2n) = elastic_1d(3., f32::MAX, -2., f32::MAX / 2.);
        assert!(v1n.is_finite() && v2n.is_finite());
        // same result as with the masses scaled down
        let (small1, small2) = elastic_1d(3., 2., -2., 1.);
        assert_close(v1n, small1);
        assert_close(v2n, small2);
    }

    #[test]
    fn test_heavy_body_barely_moves() {
        let (v1, v2) = elastic_1d(10., 1., 0., 1e6);
        assert!((v1 + 10.).abs() < 1e-3);
        assert!(v2.abs() < 1e-3);
    }

    #[test]
    fn test_oblique_collision_conserves_momentum_and_energy() {
        let pos1 = Vec2::new(0., 0.);
        let pos2 = Vec2::new(1.2, 0.9);
        let cases = [
            (Vec2::new(3., 1.), 2., Vec2::new(-1., 0.5), 7.),
            (Vec2::new(0., 4.), 1., Vec2::new(2., -2.), 1.),
            (Vec2::new(-5., 2.), 0.3, Vec2::ZERO, 12.),
        ];
        for (vel1, m1, vel2, m2) in cases {
            let (new1, new2) = resolve_elastic(pos1, vel1, m1, pos2, vel2, m2).unwrap();

            let before = momentum(m1, vel1, m2, vel2);
            let after = momentum(m1, new1, m2, new2);
            assert_close(before.x, after.x);
            assert_close(before.y, after.y);
            assert_close(energy(m1, vel1, m2, vel2), energy(m1, new1, m2, new2));
        }
    }

    #[test]
    fn test_tangential_components_unchanged() {
        let pos1 = Vec2::new(2., -1.);
        let pos2 = Vec2::new(3., 0.5);
        let vel1 = Vec2::new(4., -3.);
        let vel2 = Vec2::new(-1., 6.);
        let (_, tangent) = collision_basis(pos1, pos2).unwrap();

        let (new1, new2) = resolve_elastic(pos1, vel1, 3., pos2, vel2, 5.).unwrap();
        assert_close(new1.dot(tangent), vel1.dot(tangent));
        assert_close(new2.dot(tangent), vel2.dot(tangent));
    }

    #[test]
    fn test_oblique_equal_masses_swap_normals() {
        let pos1 = Vec2::new(0., 0.);
        let pos2 = Vec2::new(1., 1.);
        let vel1 = Vec2::new(2., 0.);
        let vel2 = Vec2::new(0., -1.);
        let (normal, _) = collision_basis(pos1, pos2).unwrap();

        let (new1, new2) = resolve_elastic(pos1, vel1, 2., pos2, vel2, 2.).unwrap();
        assert_close(new1.dot(normal), vel2.dot(normal));
        assert_close(new2.dot(normal), vel1.dot(normal));
    }
}

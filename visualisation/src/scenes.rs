use collision_engine::{ self as ce, Body, EngineResult, SimulationConfig, WorldState };
use macroquad::prelude::Vec2;
use rand::{ Rng, SeedableRng };

pub trait Scene {
    /// Short name used on the command line
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState>;
}

/// A line of touching disks hit by one more
pub struct NewtonsCradle {
    count: usize,
}

impl Scene for NewtonsCradle {
    fn id(&self) -> &'static str {
        "cradle"
    }

    fn name(&self) -> &'static str {
        "Newton's cradle"
    }

    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState> {
        let radius = 20.;
        let y = config.height / 2.;
        let start_x = config.width / 2. - self.count as f32 * radius;

        let mut sim = WorldState::new(config);
        sim.push_body(Body::new(Vec2::new(3. * radius, y), Vec2::new(200., 0.), 1., radius)?);
        for i in 0..self.count {
            // a small gap so the disks do not start overlapping
            let x = start_x + i as f32 * (2. * radius + 0.5);
            sim.push_body(Body::at_rest(Vec2::new(x, y), 1., radius)?);
        }
        Ok(sim)
    }
}

pub struct HeadOnCollision;

impl Scene for HeadOnCollision {
    fn id(&self) -> &'static str {
        "head-on"
    }

    fn name(&self) -> &'static str {
        "Head-on, unequal masses"
    }

    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState> {
        let y = config.height / 2.;
        let x = config.width / 2.;

        let mut sim = WorldState::new(config);
        sim.push_body(Body::from_density(Vec2::new(x - 200., y), Vec2::new(150., 0.), 40., 2.)?);
        sim.push_body(Body::from_density(Vec2::new(x + 200., y), Vec2::new(-150., 0.), 15., 2.)?);
        Ok(sim)
    }
}

pub struct GlancingCollision;

impl Scene for GlancingCollision {
    fn id(&self) -> &'static str {
        "glancing"
    }

    fn name(&self) -> &'static str {
        "Glancing collision"
    }

    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState> {
        let y = config.height / 2.;
        let x = config.width / 2.;

        let mut sim = WorldState::new(config);
        sim.push_body(Body::new(Vec2::new(x - 250., y - 15.), Vec2::new(180., 0.), 1., 25.)?);
        sim.push_body(Body::at_rest(Vec2::new(x, y + 15.), 1., 25.)?);
        Ok(sim)
    }
}

/// Randomly sized disks with a random density, mass is derived from the area
pub struct RandomParticles {
    seed: u64,
    count: usize,
}

impl Scene for RandomParticles {
    fn id(&self) -> &'static str {
        "random"
    }

    fn name(&self) -> &'static str {
        "Random particles"
    }

    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState> {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(self.seed);

        let mut sim = WorldState::new(config);
        for _ in 0..self.count {
            let radius: f32 = rng.random_range(2. ..=20.);
            let pos = Vec2::new(
                rng.random_range(radius..=sim.width() - radius),
                rng.random_range(radius..=sim.height() - radius),
            );
            let angle = rng.random_range(0. ..std::f32::consts::TAU);
            let speed: f32 = rng.random_range(0. ..120.);
            let density: f32 = rng.random_range(1. ..=20.);

            sim.push_body(Body::from_density(pos, Vec2::from_angle(angle) * speed, radius, density)?);
        }
        Ok(sim)
    }
}

/// Same particles, but slowed by drag and pulled down by gravity
pub struct SettlingParticles {
    seed: u64,
}

impl Scene for SettlingParticles {
    fn id(&self) -> &'static str {
        "settling"
    }

    fn name(&self) -> &'static str {
        "Settling particles"
    }

    fn create_world_state(&self, config: SimulationConfig) -> EngineResult<WorldState> {
        let config = SimulationConfig {
            restitution: config.restitution.min(0.95),
            wall_restitution: config.wall_restitution.min(0.9),
            drag: config.drag.min(0.999),
            // the camera looks at the world y-up
            gravity: Vec2::new(0., -300.),
            ..config
        };
        RandomParticles { seed: self.seed, count: 20 }.create_world_state(config)
    }
}

pub fn get_all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(RandomParticles { seed: 4444, count: 10 }),
        Box::new(SettlingParticles { seed: 4445 }),
        Box::new(NewtonsCradle { count: 5 }),
        Box::new(HeadOnCollision),
        Box::new(GlancingCollision),
    ]
}

pub fn find_scene(id: &str) -> Option<Box<dyn Scene>> {
    get_all_scenes().into_iter().find(|scene| scene.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_ids_are_unique() {
        let scenes = get_all_scenes();
        for (i, a) in scenes.iter().enumerate() {
            for b in &scenes[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_all_scenes_build_inside_bounds() {
        for scene in get_all_scenes() {
            let world = scene.create_world_state(SimulationConfig::default()).unwrap();
            assert!(!world.bodies().is_empty(), "{}", scene.name());
            for body in world.bodies() {
                assert!(body.pos.x >= body.radius() && body.pos.x <= world.width() - body.radius(), "{}", scene.name());
                assert!(body.pos.y >= body.radius() && body.pos.y <= world.height() - body.radius(), "{}", scene.name());
            }
        }
    }

    #[test]
    fn test_random_particles_are_seeded() {
        let scene = RandomParticles { seed: 1, count: 8 };
        let a = scene.create_world_state(SimulationConfig::default()).unwrap();
        let b = scene.create_world_state(SimulationConfig::default()).unwrap();
        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn test_random_particle_density() {
        let world = RandomParticles { seed: 9, count: 30 }
            .create_world_state(SimulationConfig::default())
            .unwrap();
        for body in world.bodies() {
            assert!((2. ..=20.).contains(&body.radius()));
            assert!((0.99..=20.01).contains(&body.density()));
        }
    }

    #[test]
    fn test_cradle_lines_up() {
        let world = NewtonsCradle { count: 5 }
            .create_world_state(SimulationConfig::default())
            .unwrap();
        assert!(ce::find_overlapping_pairs(world.bodies()).is_empty());
        assert!(world.bodies().iter().all(|body| body.pos.y == world.height() / 2.));
    }

    #[test]
    fn test_find_scene() {
        assert_eq!(find_scene("cradle").map(|scene| scene.name()), Some("Newton's cradle"));
        assert!(find_scene("nope").is_none());
    }
}

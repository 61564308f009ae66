use collision_engine::WorldState;
use macroquad::math::Vec2;

/// Velocity given to a dragged body per unit of distance to the cursor, per second.
/// Small enough that the cursor gets ahead of the body, which then gets flung on release.
pub const FLING_COEFFICIENT: f32 = 6.;

/// Click and drag a body around with the mouse
#[derive(Debug, Default)]
pub struct Drag {
    selected: Option<usize>,
}

impl Drag {
    /// Picks the body under the cursor, if any
    pub fn press(&mut self, world_state: &WorldState, point: Vec2) {
        self.selected = world_state.body_at(point);
        if let Some(index) = self.selected {
            tracing::debug!(index, "selected body");
        }
    }

    /// Pulls the selected body towards the cursor
    pub fn hold(&self, world_state: &mut WorldState, point: Vec2) {
        let Some(body) = self.selected.and_then(|index| world_state.bodies_mut().get_mut(index))
        else { return };
        body.follow(point, FLING_COEFFICIENT);
    }

    /// Lets go of the body, it keeps its last velocity
    pub fn release(&mut self) {
        self.selected = None;
    }
}

use std::ops::ControlFlow;

use collision_engine::{ Body, FrameInfo, Renderer };
use macroquad::{ prelude::*, ui::root_ui };

use crate::draw_polygon::draw_polygon_circle;

const CIRCLE_SEGMENTS: u32 = 30;

/// Draws the bodies as filled disks, denser ones being darker
pub struct MacroquadRenderer {
    world_width: f32,
    world_height: f32,
    pub paused: bool,
}

impl MacroquadRenderer {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            paused: false,
        }
    }

    /// World coordinates of a point on the screen
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        self.camera().screen_to_world(point)
    }

    /// Fits the whole world in the window, keeping its aspect ratio
    fn camera(&self) -> Camera2D {
        let (w, h) = (self.world_width, self.world_height);
        let (cw, ch) = if screen_width() / screen_height() > w / h {
            ((screen_width() / screen_height()) * h, h)
        } else {
            (w, (screen_height() / screen_width()) * w)
        };
        Camera2D::from_display_rect(Rect {
            x: (w - cw) / 2.,
            y: (h - ch) / 2.,
            w: cw,
            h: ch,
        })
    }
}

/// The density of the random scenes goes from 1 to 20
fn density_color(density: f32) -> Color {
    let shade = (200. - density * 10.).clamp(0., 200.) / 255.;
    Color::new(1., shade, shade, 1.)
}

impl Renderer for MacroquadRenderer {
    fn draw(&mut self, bodies: &[Body], frame: &FrameInfo) -> ControlFlow<()> {
        set_camera(&self.camera());
        clear_background(BLACK);

        // Draw the world bounds
        draw_rectangle_lines(-2.5, -2.5, self.world_width + 5., self.world_height + 5., 5., WHITE);

        for body in bodies {
            draw_polygon_circle(body.pos, body.radius(), CIRCLE_SEGMENTS, density_color(body.density()));
        }

        set_default_camera();
        root_ui().label(None, &format!("fps: {}", get_fps()));
        root_ui().label(None, &format!("time: {:.02}s", frame.time));
        root_ui().label(None, &format!("collisions: {}", frame.report.collisions));
        if self.paused {
            root_ui().label(None, "PAUSED");
        }

        if is_key_pressed(KeyCode::Escape) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

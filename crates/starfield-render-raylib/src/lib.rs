//! Raylib adapter for the starfield simulation: implements the sim's
//! canvas trait on top of a Raylib draw handle. Nothing here advances the
//! simulation; it only translates draw ops.

use raylib::prelude::*;
use starfield_sim::{FrameCanvas, Rgba};

pub mod conv {
    //! Conversions between sim types and Raylib types.
    use raylib::prelude::Color;
    use starfield_sim::Rgba;

    #[inline]
    pub fn color_to_rl(c: Rgba) -> Color {
        Color::new(c.r, c.g, c.b, c.a)
    }
}

/// Borrow of an active draw handle for the duration of one frame.
pub struct RaylibCanvas<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    background: Color,
}

impl<'a, 'b> RaylibCanvas<'a, 'b> {
    pub fn new(d: &'a mut RaylibDrawHandle<'b>) -> Self {
        Self {
            d,
            background: Color::BLACK,
        }
    }

    pub fn with_background(d: &'a mut RaylibDrawHandle<'b>, background: Color) -> Self {
        Self { d, background }
    }
}

impl FrameCanvas for RaylibCanvas<'_, '_> {
    fn clear(&mut self) {
        self.d.clear_background(self.background);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.d
            .draw_circle_v(Vector2::new(x, y), radius, conv::color_to_rl(color));
    }
}

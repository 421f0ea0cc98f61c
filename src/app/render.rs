use raylib::prelude::*;
use starfield_render_raylib::RaylibCanvas;

use super::App;

impl App {
    /// Advance the simulation one frame and draw it through the Raylib
    /// canvas adapter.
    pub fn render(&mut self, d: &mut RaylibDrawHandle) {
        {
            let mut canvas = RaylibCanvas::new(d);
            self.sim.advance(&mut canvas);
        }
        if self.show_fps {
            d.draw_fps(12, 12);
        }
    }
}

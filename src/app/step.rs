use raylib::prelude::*;
use starfield_sim::Viewport;

use super::App;

impl App {
    /// Pre-draw housekeeping for one frame. Window resizes reset the whole
    /// field to the new bounds (a deliberate visual reset, not a rescale).
    pub fn step(&mut self, rl: &RaylibHandle) {
        if rl.is_window_resized() {
            let viewport =
                Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            log::debug!(
                "viewport resized to {}x{}",
                viewport.width,
                viewport.height
            );
            self.sim.resize(viewport);
        }
    }
}

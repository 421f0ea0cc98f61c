use rand::rngs::StdRng;
use raylib::prelude::*;
use starfield_sim::{Starfield, Viewport};

use crate::config::AppConfig;

/// Everything the frame loop touches: one owned simulator instance plus
/// overlay toggles. Teardown is dropping this when the loop exits.
pub struct App {
    pub sim: Starfield<StdRng>,
    pub show_fps: bool,
}

impl App {
    pub fn new(rl: &RaylibHandle, cfg: &AppConfig, rng: StdRng) -> Self {
        let viewport = Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        Self {
            sim: Starfield::new(cfg.sim_config(), viewport, rng),
            show_fps: cfg.window.show_fps,
        }
    }
}

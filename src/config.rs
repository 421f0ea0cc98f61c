use std::path::Path;

use serde::Deserialize;
use starfield_sim::SimConfig;

/// Resolved runtime configuration: defaults, overlaid by an optional
/// `starfield.toml`, overlaid by CLI flags (handled in `main`).
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sim: SimSettings,
}

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub target_fps: u32,
    pub show_fps: bool,
}

#[derive(Clone, Debug)]
pub struct SimSettings {
    pub star_count: usize,
    pub speed: f32,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    window: Option<WindowSection>,
    sim: Option<SimSection>,
}

#[derive(Deserialize, Default)]
struct WindowSection {
    width: Option<i32>,
    height: Option<i32>,
    target_fps: Option<u32>,
    show_fps: Option<bool>,
}

#[derive(Deserialize, Default)]
struct SimSection {
    star_count: Option<usize>,
    speed: Option<f32>,
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            window: WindowConfig {
                width: 1280,
                height: 720,
                target_fps: 60,
                show_fps: false,
            },
            sim: SimSettings {
                star_count: sim.star_count,
                speed: sim.speed,
                seed: None,
            },
        }
    }
}

impl AppConfig {
    /// Load from `path` if it exists; a missing file means defaults and a
    /// broken file is logged and ignored rather than fatal.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(s) => match toml::from_str::<FileConfig>(&s) {
                Ok(file) => Self::default().merged(file),
                Err(e) => {
                    log::warn!("{} parse error: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("{} read error: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn merged(mut self, file: FileConfig) -> Self {
        if let Some(w) = file.window {
            self.window.width = w.width.unwrap_or(self.window.width);
            self.window.height = w.height.unwrap_or(self.window.height);
            self.window.target_fps = w.target_fps.unwrap_or(self.window.target_fps);
            self.window.show_fps = w.show_fps.unwrap_or(self.window.show_fps);
        }
        if let Some(s) = file.sim {
            self.sim.star_count = s.star_count.unwrap_or(self.sim.star_count);
            self.sim.speed = s.speed.unwrap_or(self.sim.speed);
            self.sim.seed = s.seed.or(self.sim.seed);
        }
        self
    }

    /// Simulator tunables; projection scale and far plane stay stock.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            star_count: self.sim.star_count,
            speed: self.sim.speed,
            ..SimConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_simulation() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sim.star_count, 400);
        assert_eq!(cfg.sim.speed, 0.15);
        assert_eq!(cfg.sim.seed, None);
        assert_eq!(cfg.window.target_fps, 60);
    }

    #[test]
    fn file_values_overlay_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            [window]
            width = 1920
            show_fps = true

            [sim]
            star_count = 1200
            seed = 42
            "#,
        )
        .unwrap();
        let cfg = AppConfig::default().merged(file);
        assert_eq!(cfg.window.width, 1920);
        assert_eq!(cfg.window.height, 720);
        assert!(cfg.window.show_fps);
        assert_eq!(cfg.sim.star_count, 1200);
        assert_eq!(cfg.sim.speed, 0.15);
        assert_eq!(cfg.sim.seed, Some(42));
    }

    #[test]
    fn partial_sections_are_fine() {
        let file: FileConfig = toml::from_str("[sim]\nspeed = 0.4\n").unwrap();
        let cfg = AppConfig::default().merged(file);
        assert_eq!(cfg.sim.speed, 0.4);
        assert_eq!(cfg.sim.star_count, 400);
    }
}

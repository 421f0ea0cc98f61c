use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod app;
mod config;

use app::App;
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "starfield", about = "Animated perspective starfield")]
struct Args {
    /// Optional TOML config; missing file falls back to defaults
    #[arg(long, default_value = "starfield.toml")]
    config: PathBuf,
    /// Initial window width in pixels
    #[arg(long)]
    width: Option<i32>,
    /// Initial window height in pixels
    #[arg(long)]
    height: Option<i32>,
    /// Number of simulated stars
    #[arg(long)]
    stars: Option<usize>,
    /// Per-frame depth decrement
    #[arg(long)]
    speed: Option<f32>,
    /// RNG seed for a reproducible field (default: from entropy)
    #[arg(long)]
    seed: Option<u64>,
    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,
    /// Draw an FPS counter overlay
    #[arg(long)]
    show_fps: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = AppConfig::load(&args.config);
    if let Some(w) = args.width {
        cfg.window.width = w;
    }
    if let Some(h) = args.height {
        cfg.window.height = h;
    }
    if let Some(n) = args.stars {
        cfg.sim.star_count = n;
    }
    if let Some(s) = args.speed {
        cfg.sim.speed = s;
    }
    if let Some(fps) = args.fps {
        cfg.window.target_fps = fps;
    }
    if args.seed.is_some() {
        cfg.sim.seed = args.seed;
    }
    if args.show_fps {
        cfg.window.show_fps = true;
    }

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title("Starfield")
        .resizable()
        .build();
    rl.set_target_fps(cfg.window.target_fps);

    let seed = cfg.sim.seed.unwrap_or_else(rand::random);
    log::info!(
        "starfield {}x{} stars={} speed={} seed={}",
        cfg.window.width,
        cfg.window.height,
        cfg.sim.star_count,
        cfg.sim.speed,
        seed
    );

    let mut app = App::new(&rl, &cfg, StdRng::seed_from_u64(seed));

    // Explicit frame loop: one cooperative frame per iteration, torn down
    // exactly when the loop exits.
    while !rl.window_should_close() {
        app.step(&rl);
        let mut d = rl.begin_drawing(&thread);
        app.render(&mut d);
    }
    log::info!("starfield stopped");
}

//! Starfield simulation core (no Raylib dependency).
//!
//! Owns a fixed-size set of pseudo-3D particles, advances them once per
//! frame, projects them onto a 2D viewport with perspective division and
//! recycles anything that flies past the camera or off screen. Drawing goes
//! through the [`FrameCanvas`] trait so the renderer stays out of this crate.
#![forbid(unsafe_code)]

use rand::Rng;

/// Default number of simulated stars.
pub const STAR_COUNT: usize = 400;
/// Default per-frame depth decrement (frame-rate dependent by design).
pub const SPEED: f32 = 0.15;
/// Default far plane; recycled stars re-enter at this depth.
pub const MAX_DEPTH: f32 = 1000.0;
/// Default perspective projection scale factor.
pub const PROJECTION_SCALE: f32 = 300.0;
/// Floor for drawn radii so distant stars never degenerate to nothing.
pub const MIN_DRAW_RADIUS: f32 = 0.3;
/// Fixed star tint (pale blue-white); only alpha varies per star.
pub const STAR_TINT: (u8, u8, u8) = (200, 220, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// One particle. `x`/`y` live on a plane centered at the viewport origin;
/// `depth` is distance from the camera. `size` and `opacity` are fixed for
/// the star's lifetime and only change on full reinitialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub size: f32,
    pub opacity: f32,
}

/// Drawing primitives the simulator needs from a surface. The Raylib
/// adapter implements this for a draw handle; tests implement it with a
/// recording canvas.
pub trait FrameCanvas {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Tunables. `Default` reproduces the stock animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub star_count: usize,
    pub speed: f32,
    pub max_depth: f32,
    pub projection_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            speed: SPEED,
            max_depth: MAX_DEPTH,
            projection_scale: PROJECTION_SCALE,
        }
    }
}

/// Perspective-project a star onto viewport coordinates.
#[inline]
pub fn project(star: &Star, viewport: Viewport, scale: f32) -> (f32, f32) {
    let (cx, cy) = viewport.center();
    (
        star.x / star.depth * scale + cx,
        star.y / star.depth * scale + cy,
    )
}

/// Linear fade with distance: 1 at the camera, 0 at the far plane.
#[inline]
pub fn brightness(depth: f32, max_depth: f32) -> f32 {
    1.0 - depth / max_depth
}

/// An owned starfield instance. Holds its particle set, viewport and RNG;
/// no module-level state, so independent instances never interact. The
/// caller owns the frame loop: call [`Starfield::advance`] once per frame
/// and simply stop calling it to tear down.
pub struct Starfield<R: Rng> {
    cfg: SimConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    pub fn new(cfg: SimConfig, viewport: Viewport, rng: R) -> Self {
        let mut field = Self {
            cfg,
            viewport,
            stars: Vec::with_capacity(cfg.star_count),
            rng,
        };
        field.reseed();
        field
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn config(&self) -> SimConfig {
        self.cfg
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    /// Viewport changed: store the new bounds and rebuild the whole
    /// particle set. In-flight animation state is discarded rather than
    /// rescaled (a visible reset on resize, matching the stock behavior).
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reseed();
    }

    /// Refill the particle set to exactly `star_count` fresh samples.
    fn reseed(&mut self) {
        self.stars.clear();
        for _ in 0..self.cfg.star_count {
            let star = Star {
                x: sample_centered(&mut self.rng, self.viewport.width),
                y: sample_centered(&mut self.rng, self.viewport.height),
                depth: sample_upto(&mut self.rng, self.cfg.max_depth),
                size: self.rng.random_range(0.5..2.0),
                opacity: self.rng.random_range(0.5..1.0),
            };
            self.stars.push(star);
        }
    }

    /// Advance the simulation one frame and draw it. Every star that
    /// reaches the camera or projects off screen is recycled within this
    /// same call; it is never left invalid across frames, and a recycled
    /// star skips drawing for the frame.
    pub fn advance(&mut self, canvas: &mut impl FrameCanvas) {
        canvas.clear();
        let vp = self.viewport;
        let cfg = self.cfg;
        for star in &mut self.stars {
            star.depth -= cfg.speed;
            if star.depth <= 0.0 {
                recycle(star, &mut self.rng, vp, cfg.max_depth);
                continue;
            }
            let (sx, sy) = project(star, vp, cfg.projection_scale);
            if !vp.contains(sx, sy) {
                recycle(star, &mut self.rng, vp, cfg.max_depth);
                continue;
            }
            let b = brightness(star.depth, cfg.max_depth);
            let radius = (star.size * b * 2.0).max(MIN_DRAW_RADIUS);
            let alpha = ((b * star.opacity).clamp(0.0, 1.0) * 255.0).round() as u8;
            let (r, g, bl) = STAR_TINT;
            canvas.fill_circle(sx, sy, radius, Rgba { r, g, b: bl, a: alpha });
        }
    }
}

/// Re-enter a star at the far plane with a fresh position. `size` and
/// `opacity` are kept; only full reinitialization (resize) resamples them.
fn recycle(star: &mut Star, rng: &mut impl Rng, viewport: Viewport, max_depth: f32) {
    star.x = sample_centered(rng, viewport.width);
    star.y = sample_centered(rng, viewport.height);
    star.depth = max_depth;
}

/// Uniform over `[-extent/2, extent/2)`. Degenerate extents collapse to 0.
#[inline]
fn sample_centered(rng: &mut impl Rng, extent: f32) -> f32 {
    let half = extent / 2.0;
    if half > 0.0 {
        rng.random_range(-half..half)
    } else {
        0.0
    }
}

/// Uniform over `[0, limit)`, tolerating a degenerate limit.
#[inline]
fn sample_upto(rng: &mut impl Rng, limit: f32) -> f32 {
    if limit > 0.0 { rng.random_range(0.0..limit) } else { 0.0 }
}

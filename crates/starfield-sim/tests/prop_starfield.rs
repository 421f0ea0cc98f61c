use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use starfield_sim::{
    FrameCanvas, MAX_DEPTH, PROJECTION_SCALE, Rgba, SimConfig, Star, Starfield, Viewport,
    brightness, project,
};

struct NullCanvas;

impl FrameCanvas for NullCanvas {
    fn clear(&mut self) {}
    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Rgba) {}
}

fn small_cfg() -> SimConfig {
    // Full 400-star fields make the frame loops below needlessly slow.
    SimConfig {
        star_count: 64,
        ..SimConfig::default()
    }
}

fn arb_viewport() -> impl Strategy<Value = Viewport> {
    (64.0f32..2048.0, 64.0f32..2048.0).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    // Particle count never drifts, whatever the seed or frame count.
    #[test]
    fn star_count_invariant(
        seed in any::<u64>(),
        frames in 0usize..200,
        vp in arb_viewport(),
    ) {
        let mut sim = Starfield::new(small_cfg(), vp, StdRng::seed_from_u64(seed));
        for _ in 0..frames {
            sim.advance(&mut NullCanvas);
        }
        prop_assert_eq!(sim.stars().len(), 64);
    }

    // After at least one advance every depth sits in (0, MAX_DEPTH]:
    // anything drained past the camera re-entered at the far plane within
    // the same frame.
    #[test]
    fn depth_stays_in_bounds(
        seed in any::<u64>(),
        frames in 1usize..200,
        vp in arb_viewport(),
    ) {
        let mut sim = Starfield::new(small_cfg(), vp, StdRng::seed_from_u64(seed));
        for _ in 0..frames {
            sim.advance(&mut NullCanvas);
        }
        for s in sim.stars() {
            prop_assert!(s.depth > 0.0 && s.depth <= MAX_DEPTH);
        }
    }

    // Nearer stars are strictly brighter.
    #[test]
    fn brightness_monotone_in_depth(
        d1 in 0.1f32..MAX_DEPTH,
        d2 in 0.1f32..MAX_DEPTH,
    ) {
        prop_assume!(d1 < d2);
        prop_assert!(brightness(d1, MAX_DEPTH) > brightness(d2, MAX_DEPTH));
    }

    // A star on the viewing axis projects to the viewport center at any
    // depth; perspective division only displaces off-axis stars.
    #[test]
    fn on_axis_star_projects_to_center(
        depth in 0.1f32..MAX_DEPTH,
        vp in arb_viewport(),
    ) {
        let star = Star { x: 0.0, y: 0.0, depth, size: 1.0, opacity: 1.0 };
        let (sx, sy) = project(&star, vp, PROJECTION_SCALE);
        let (cx, cy) = vp.center();
        prop_assert_eq!((sx, sy), (cx, cy));
    }

    // Resize always rebuilds the full set inside the new bounds.
    #[test]
    fn resize_rebuilds_within_new_bounds(
        seed in any::<u64>(),
        before in arb_viewport(),
        after in arb_viewport(),
    ) {
        let mut sim = Starfield::new(small_cfg(), before, StdRng::seed_from_u64(seed));
        sim.advance(&mut NullCanvas);
        sim.resize(after);
        prop_assert_eq!(sim.stars().len(), 64);
        for s in sim.stars() {
            prop_assert!(s.x >= -after.width / 2.0 && s.x < after.width / 2.0);
            prop_assert!(s.y >= -after.height / 2.0 && s.y < after.height / 2.0);
            prop_assert!(s.depth >= 0.0 && s.depth < MAX_DEPTH);
        }
    }
}

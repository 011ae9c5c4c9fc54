// Host-side tests for the pointer / idle-circle parallax.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}

use constants::{IDLE_CYCLE_MS, IDLE_RADIUS, POINTER_SMOOTHING};
use glam::DVec2;
use pointer::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn idle_point_lies_on_aspect_scaled_ellipse() {
    for aspect in [0.5, 1.0, 1.25, 16.0 / 9.0] {
        let rx = IDLE_RADIUS;
        let ry = IDLE_RADIUS * aspect;
        for i in 0..240 {
            let elapsed = i as f64 * 397.0;
            let p = idle_circle_point(elapsed, IDLE_CYCLE_MS, aspect);
            let r = (p.x - 0.5).powi(2) / (rx * rx) + (p.y - 0.5).powi(2) / (ry * ry);
            assert!(approx(r, 1.0, 1e-9), "aspect {aspect} elapsed {elapsed}: {r}");
        }
    }
}

#[test]
fn idle_point_wraps_each_cycle() {
    let a = idle_circle_point(1234.0, 10_000.0, 1.25);
    let b = idle_circle_point(31_234.0, 10_000.0, 1.25);
    assert!(approx(a.x, b.x, 1e-9) && approx(a.y, b.y, 1e-9));

    let start = idle_circle_point(0.0, 10_000.0, 1.25);
    assert!(approx(start.x, 0.5 + IDLE_RADIUS, 1e-12));
    assert!(approx(start.y, 0.5, 1e-12));
}

#[test]
fn smoothing_converges_without_overshoot() {
    for (from, to) in [(0.1, 0.9), (0.9, 0.1), (0.0, 1.0), (1.0, 0.0)] {
        let mut s = PointerState {
            target: DVec2::splat(to),
            smooth: DVec2::splat(from),
        };
        let mut prev_gap = (to - from).abs();
        for _ in 0..500 {
            let p = s.step();
            let gap = (to - p.x).abs();
            assert!(gap < prev_gap, "not contracting: {gap} >= {prev_gap}");
            assert!(gap <= prev_gap * (1.0 - POINTER_SMOOTHING) + 1e-12);
            if to > from {
                assert!(p.x <= to);
            } else {
                assert!(p.x >= to);
            }
            assert!((0.0..=1.0).contains(&p.x));
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-5);
    }
}

#[test]
fn smoothing_axes_are_independent() {
    let mut s = PointerState::default();
    assert_eq!(s.smooth, DVec2::splat(0.5));
    s.set_target(1.0, 0.5);
    let p = s.step();
    assert!(approx(p.x, 0.515, 1e-12));
    assert!(approx(p.y, 0.5, 1e-12));
}

#[test]
fn scenario_centered_mouse_on_1000x800() {
    let vp = Viewport::new(1000.0, 800.0);
    assert!(approx(vp.vw(), 10.0, 1e-12));
    assert!(approx(vp.vh(), 8.0, 1e-12));
    assert!(approx(reference_image_width(&vp), 690.64, 1e-9));

    let base = base_offset(DVec2::new(0.5, 0.5), &vp);
    assert!(approx(base.x, 0.0, 1e-12));
    assert!(approx(base.y, -107.8045875, 1e-6));

    let offsets = layer_offsets(base);
    let mountains = offsets.iter().find(|o| o.layer == Layer::Mountains).unwrap();
    assert!(approx(mountains.offset.x, 0.0, 1e-12));
    assert!(approx(mountains.offset.y, -107.8045875 * 0.5, 1e-6));
}

#[test]
fn image_width_keeps_literal_min_of_max() {
    // Wide viewport: the 80vw lower bound (1600) exceeds the 86.33vh upper
    // bound (863.3); the upper bound wins instead of clamping up.
    let vp = Viewport::new(2000.0, 1000.0);
    assert!(approx(reference_image_width(&vp), 863.3, 1e-9));

    // Tall viewport: the preferred 50vh term dominates
    let vp = Viewport::new(400.0, 1000.0);
    assert!(approx(reference_image_width(&vp), 500.0, 1e-9));
}

#[test]
fn layer_offsets_scale_base_per_layer() {
    let base = DVec2::new(100.0, -40.0);
    let offsets = layer_offsets(base);
    let expected = [
        (Layer::Clouds, -10.0, -16.0),
        (Layer::Mountains, 20.0, -20.0),
        (Layer::Field, 60.0, -24.0),
    ];
    for (o, (layer, x, y)) in offsets.iter().zip(expected) {
        assert_eq!(o.layer, layer);
        assert!(approx(o.offset.x, x, 1e-9), "{:?}", o);
        assert!(approx(o.offset.y, y, 1e-9), "{:?}", o);
    }
}

#[test]
fn timeline_anchors_on_first_tick() {
    let mut t = Timeline::default();
    assert_eq!(t.start_ms, None);
    assert_eq!(t.elapsed(1000.0), 0.0);
    assert_eq!(t.elapsed(1500.0), 500.0);
    assert_eq!(t.start_ms, Some(1000.0));
}

#[test]
fn first_tick_blends_circle_start_with_centered_pointer() {
    let vp = Viewport::new(1000.0, 800.0);
    let mut motion = IdleParallax::default();
    let got = motion.tick(16.0, &vp).unwrap();
    // Circle starts at (0.65, 0.5); pointer rests at (0.5, 0.5)
    let want = layer_offsets(base_offset(DVec2::new(0.575, 0.5), &vp));
    for (g, w) in got.iter().zip(want.iter()) {
        assert!(approx(g.offset.x, w.offset.x, 1e-9));
        assert!(approx(g.offset.y, w.offset.y, 1e-9));
    }
}

#[test]
fn initial_offsets_are_centered() {
    let vp = Viewport::new(1440.0, 900.0);
    for o in IdleParallax::initial(&vp).unwrap() {
        assert!(approx(o.offset.x, 0.0, 1e-12), "{:?}", o);
        assert!(o.offset.y <= 0.0);
    }
}

#[test]
fn blend_is_axis_mean() {
    let b = blend(DVec2::new(0.2, 0.8), DVec2::new(0.6, 0.4));
    assert!(approx(b.x, 0.4, 1e-12));
    assert!(approx(b.y, 0.6, 1e-12));
}

#[test]
fn collapsed_viewport_publishes_nothing() {
    let collapsed = Viewport::new(1000.0, 0.0);
    assert!(!collapsed.is_renderable());
    assert!(!Viewport::new(0.0, 800.0).is_renderable());
    assert!(IdleParallax::initial(&collapsed).is_none());

    let mut motion = IdleParallax::default();
    motion.pointer.set_target(1.0, 1.0);
    assert!(motion.tick(0.0, &collapsed).is_none());
    // Smoothing and the timeline keep advancing while hidden
    assert!(motion.pointer.smooth.x > 0.5);
    assert_eq!(motion.timeline.start_ms, Some(0.0));

    let offsets = motion.tick(16.0, &Viewport::new(1000.0, 800.0)).unwrap();
    assert!(offsets
        .iter()
        .all(|o| o.offset.x.is_finite() && o.offset.y.is_finite()));
}

// Host-side tests for the chase-chain engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/chain.rs"]
mod chain;

use chain::*;
use constants::*;
use glam::Vec2;

#[test]
fn head_distance_decreases_monotonically_without_overshoot() {
    let target = Vec2::new(300.0, 200.0);
    let mut c = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);

    let mut prev = c.head.distance(target);
    for _ in 0..40 {
        c.advance(target);
        let d = c.head.distance(target);
        assert!(d < prev, "distance should shrink every tick");
        // Easing fraction is in (0,1), so the head never crosses the target
        assert!(c.head.x <= target.x && c.head.y <= target.y);
        prev = d;
    }
}

#[test]
fn head_converges_geometrically_to_a_held_target() {
    let target = Vec2::new(640.0, 360.0);
    let start = Vec2::new(100.0, 50.0);
    let mut c = ChaseChain::new(start, TRAIL_LENGTH);

    let d0 = start.distance(target);
    for k in 1..=30 {
        c.advance(target);
        let expected = d0 * (1.0 - HEAD_EASE).powi(k);
        let actual = c.head.distance(target);
        assert!(
            (actual - expected).abs() <= expected * 1e-3 + 1e-3,
            "tick {k}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn whole_chain_converges_to_a_held_target() {
    let target = Vec2::new(-250.0, 420.0);
    let mut c = ChaseChain::new(Vec2::new(500.0, -100.0), TRAIL_LENGTH);

    for _ in 0..500 {
        c.advance(target);
    }
    assert!(c.head.distance(target) < 1e-3);
    for (i, node) in c.nodes().iter().enumerate() {
        assert!(
            node.distance(target) < 1e-2,
            "node {i} did not converge: {node:?}"
        );
    }
}

#[test]
fn trail_delay_increases_with_index_under_constant_velocity() {
    let mut c = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);
    let mut target = Vec2::ZERO;

    // Hold a constant target velocity long enough to reach steady state.
    for _ in 0..300 {
        target.x += 5.0;
        c.advance(target);
    }

    let mut prev = c.head.distance(target);
    for (i, node) in c.nodes().iter().enumerate() {
        let d = node.distance(target);
        assert!(
            d > prev,
            "node {i} should trail further than its predecessor ({d} <= {prev})"
        );
        prev = d;
    }
}

#[test]
fn nodes_stay_between_head_and_tail_order() {
    // Under steady rightward motion the chain lines up behind the head in
    // index order.
    let mut c = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);
    let mut target = Vec2::ZERO;
    for _ in 0..300 {
        target.x += 3.0;
        c.advance(target);
    }
    let mut prev_x = c.head.x;
    for node in c.nodes() {
        assert!(node.x < prev_x);
        prev_x = node.x;
    }
}

#[test]
fn segment_size_shrinks_linearly_with_floor() {
    assert_eq!(segment_size(0), 40.0);
    assert_eq!(segment_size(1), 36.0);
    assert_eq!(segment_size(7), 12.0);
    // 40 - 4*8 = 8 is below the floor
    assert_eq!(segment_size(8), 10.0);
    assert_eq!(segment_size(10), 10.0);
    assert_eq!(segment_size(100), 10.0);
}

#[test]
fn segment_opacity_fades_with_index() {
    assert!((segment_opacity(0, 10) - 1.0).abs() < 1e-6);
    assert!((segment_opacity(5, 10) - 0.5).abs() < 1e-6);
    assert!((segment_opacity(9, 10) - 0.1).abs() < 1e-6);
    for i in 1..10 {
        assert!(segment_opacity(i, 10) < segment_opacity(i - 1, 10));
    }
}

#[test]
fn heading_degrees_matches_cardinal_directions() {
    let c = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);
    assert!((c.heading_degrees(Vec2::new(10.0, 0.0)) - 0.0).abs() < 1e-4);
    // y grows downward in viewport coordinates; atan2 doesn't care
    assert!((c.heading_degrees(Vec2::new(0.0, 10.0)) - 90.0).abs() < 1e-4);
    assert!((c.heading_degrees(Vec2::new(-10.0, 0.0)).abs() - 180.0).abs() < 1e-4);
    assert!((c.heading_degrees(Vec2::new(0.0, -10.0)) + 90.0).abs() < 1e-4);
}

#[test]
fn advance_is_deterministic_for_the_same_input_history() {
    let targets = [
        Vec2::new(10.0, 40.0),
        Vec2::new(200.0, -30.0),
        Vec2::new(-75.0, 120.0),
    ];
    let mut a = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);
    let mut b = ChaseChain::new(Vec2::ZERO, TRAIL_LENGTH);
    for t in targets.iter().cycle().take(90) {
        a.advance(*t);
        b.advance(*t);
    }
    assert_eq!(a.head, b.head);
    assert_eq!(a.nodes(), b.nodes());
}

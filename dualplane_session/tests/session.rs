// Copyright 2025 the Dualplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `dualplane_session` crate.
//!
//! These drive a [`DualityPair`] the way a host would — raw pointer
//! events, wheel deltas, per-frame renders into a recording surface — and
//! assert on the cross-view invariants: index alignment, the duality of
//! mirrored primitives, shared colors, and the render op stream.

use kurbo::{Point, Size, Vec2};

use dualplane_geometry::{DrawMode, GestureError, Primitive};
use dualplane_imaging::{Color, SurfaceOp};
use dualplane_imaging_ref::RecordingSurface;
use dualplane_session::{
    DEFAULT_PALETTE, DualityPair, PointerButton, PointerEvent, PointerResponse, ViewRole,
};

fn pair() -> DualityPair {
    let size = Size::new(600.0, 600.0);
    DualityPair::new(size, size)
}

/// Presses and releases the left button at the given plane points.
fn gesture(pair: &mut DualityPair, role: ViewRole, start: Point, end: Point) -> PointerResponse {
    let down = pair.view(role).viewport().to_surface(start);
    let up = pair.view(role).viewport().to_surface(end);
    pair.pointer_event(
        role,
        PointerEvent::Down {
            button: PointerButton::Left,
            pos: down,
        },
    );
    pair.pointer_event(
        role,
        PointerEvent::Up {
            button: PointerButton::Left,
            pos: up,
        },
    )
}

fn tap(pair: &mut DualityPair, role: ViewRole, at: Point) -> PointerResponse {
    gesture(pair, role, at, at)
}

#[test]
fn tap_mirrors_the_dual_line() {
    let mut pair = pair();
    let response = tap(&mut pair, ViewRole::Primal, Point::new(3.0, 4.0));

    assert_eq!(response, PointerResponse::Inserted(0));
    let primal = pair.view(ViewRole::Primal).primitives()[0];
    let dual = pair.view(ViewRole::Dual).primitives()[0];
    match primal {
        Primitive::Point(p) => {
            assert!((p.x - 3.0).abs() < 1e-9);
            assert!((p.y - 4.0).abs() < 1e-9);
        }
        other => panic!("expected a point, got {other:?}"),
    }
    match dual {
        Primitive::Line(line) => {
            assert!((line.slope - 3.0).abs() < 1e-9);
            assert!((line.intercept - 4.0).abs() < 1e-9);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn line_mode_drag_mirrors_the_dual_point() {
    let mut pair = pair();
    pair.set_mode(DrawMode::Line);
    let response = gesture(
        &mut pair,
        ViewRole::Primal,
        Point::new(0.0, 0.0),
        Point::new(2.0, 4.0),
    );

    assert_eq!(response, PointerResponse::Inserted(0));
    match pair.view(ViewRole::Primal).primitives()[0] {
        Primitive::Line(line) => {
            assert!((line.slope - 2.0).abs() < 1e-9);
            assert!(line.intercept.abs() < 1e-9);
        }
        other => panic!("expected a line, got {other:?}"),
    }
    match pair.view(ViewRole::Dual).primitives()[0] {
        Primitive::Point(p) => {
            assert!((p.x - 2.0).abs() < 1e-9);
            assert!(p.y.abs() < 1e-9);
        }
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn segment_drag_mirrors_the_dual_wedge() {
    let mut pair = pair();
    let response = gesture(
        &mut pair,
        ViewRole::Primal,
        Point::new(-1.0, 0.5),
        Point::new(1.0, 2.0),
    );

    assert_eq!(response, PointerResponse::Inserted(0));
    match pair.view(ViewRole::Dual).primitives()[0] {
        Primitive::Wedge(l1, l2) => {
            assert!((l1.slope + 1.0).abs() < 1e-9);
            assert!((l1.intercept - 0.5).abs() < 1e-9);
            assert!((l2.slope - 1.0).abs() < 1e-9);
            assert!((l2.intercept - 2.0).abs() < 1e-9);
        }
        other => panic!("expected a wedge, got {other:?}"),
    }
}

#[test]
fn sequences_and_colors_stay_aligned_across_gestures() {
    let mut pair = pair();

    tap(&mut pair, ViewRole::Primal, Point::new(0.5, 0.5));
    gesture(
        &mut pair,
        ViewRole::Dual,
        Point::new(-1.0, -1.0),
        Point::new(1.0, 1.0),
    );
    tap(&mut pair, ViewRole::Dual, Point::new(-2.0, 1.0));

    // A rejected gesture must not grow anything.
    pair.set_mode(DrawMode::Line);
    let rejected = gesture(
        &mut pair,
        ViewRole::Primal,
        Point::new(1.0, -2.0),
        Point::new(1.0, 2.0),
    );
    assert_eq!(rejected, PointerResponse::Rejected(GestureError::VerticalLine));

    assert_eq!(pair.len(), 3);
    assert_eq!(pair.view(ViewRole::Primal).primitives().len(), 3);
    assert_eq!(pair.view(ViewRole::Dual).primitives().len(), 3);
    assert_eq!(pair.session().colors().len(), 3);

    // Index i is the dual of index i, in both directions.
    for i in 0..3 {
        assert_eq!(
            pair.view(ViewRole::Primal).primitives()[i].dual(),
            pair.view(ViewRole::Dual).primitives()[i]
        );
    }
}

#[test]
fn colors_are_mirrored_between_the_views() {
    let mut pair = pair();
    tap(&mut pair, ViewRole::Primal, Point::new(0.0, 1.0));
    tap(&mut pair, ViewRole::Dual, Point::new(1.0, 0.0));

    assert_eq!(pair.color(0), Some(DEFAULT_PALETTE[0]));
    assert_eq!(pair.color(1), Some(DEFAULT_PALETTE[1]));

    // Setting through "the primal control" is visible to the dual's, and
    // vice versa: there is only one table.
    let teal = Color::from_rgba8(42, 161, 152, 255);
    assert!(pair.set_color(1, teal));
    assert_eq!(pair.color(1), Some(teal));

    // Out-of-range indices are reported, not grown.
    assert!(!pair.set_color(5, teal));
    assert_eq!(pair.len(), 2);
}

#[test]
fn mode_is_global_to_both_views() {
    let mut pair = pair();
    pair.toggle_mode();
    assert_eq!(pair.mode(), DrawMode::Line);

    gesture(
        &mut pair,
        ViewRole::Dual,
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
    );
    assert!(matches!(
        pair.view(ViewRole::Dual).primitives()[0],
        Primitive::Line(_)
    ));
    assert!(matches!(
        pair.view(ViewRole::Primal).primitives()[0],
        Primitive::Point(_)
    ));
}

#[test]
fn render_clears_then_draws_the_tapped_disc_in_its_table_color() {
    let mut pair = pair();
    tap(&mut pair, ViewRole::Primal, Point::new(1.0, 1.0));

    let mut surface = RecordingSurface::new();
    pair.render_frame(ViewRole::Primal, &mut surface);

    let events = surface.events();
    assert!(matches!(events[0].op, SurfaceOp::Clear(_)));

    let expected_center = pair
        .view(ViewRole::Primal)
        .viewport()
        .to_surface(Point::new(1.0, 1.0));
    let disc = events
        .iter()
        .find(|event| matches!(event.op, SurfaceOp::Disc { .. }))
        .expect("the tapped point renders as a disc");
    match disc.op {
        SurfaceOp::Disc { center, radius } => {
            assert!((center.x - expected_center.x).abs() < 1e-9);
            assert!((center.y - expected_center.y).abs() < 1e-9);
            assert_eq!(radius, 5.0);
        }
        _ => unreachable!(),
    }
    assert_eq!(disc.state.fill, Some(DEFAULT_PALETTE[0]));
}

#[test]
fn wedge_renders_two_translucent_regions() {
    let mut pair = pair();
    // Endpoints with opposite x signs dualize to opposite-slope boundaries.
    gesture(
        &mut pair,
        ViewRole::Primal,
        Point::new(-1.0, 0.0),
        Point::new(1.0, 0.0),
    );

    let mut surface = RecordingSurface::new();
    pair.render_frame(ViewRole::Dual, &mut surface);

    let polygons: Vec<_> = surface
        .events()
        .iter()
        .filter(|event| matches!(event.op, SurfaceOp::Polygon(_)))
        .collect();
    assert_eq!(polygons.len(), 2);
    for polygon in polygons {
        let fill = polygon.state.fill.expect("regions are filled");
        assert!(fill.components[3] < 1.0, "region fill must be translucent");
        match &polygon.op {
            SurfaceOp::Polygon(vertices) => assert_eq!(vertices.len(), 3),
            _ => unreachable!(),
        }
    }
}

#[test]
fn degenerate_wedge_keeps_boundaries_and_skips_the_fill() {
    let mut pair = pair();
    // A vertical segment dualizes to a parallel-boundary wedge.
    gesture(
        &mut pair,
        ViewRole::Primal,
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
    );

    let mut surface = RecordingSurface::new();
    pair.render_frame(ViewRole::Dual, &mut surface);

    let polygon_count = surface
        .ops()
        .filter(|op| matches!(op, SurfaceOp::Polygon(_)))
        .count();
    assert_eq!(polygon_count, 0);

    // The two boundary lines are still stroked in the wedge's color.
    let boundary_count = surface
        .events()
        .iter()
        .filter(|event| {
            matches!(event.op, SurfaceOp::Line { .. })
                && event.state.stroke == Some(DEFAULT_PALETTE[0])
        })
        .count();
    assert_eq!(boundary_count, 2);
}

#[test]
fn render_advances_the_eased_pan_one_step_per_frame() {
    let mut pair = pair();
    pair.view_mut(ViewRole::Primal)
        .viewport_mut()
        .set_target_offset(Vec2::new(1.0, 0.0));

    let mut surface = RecordingSurface::new();
    pair.render_frame(ViewRole::Primal, &mut surface);
    let after_one = pair.view(ViewRole::Primal).viewport().offset().x;
    assert!((after_one - 0.1).abs() < 1e-12);

    pair.render_frame(ViewRole::Primal, &mut surface);
    let after_two = pair.view(ViewRole::Primal).viewport().offset().x;
    assert!((after_two - 0.19).abs() < 1e-12);

    // The partner view's pan is untouched.
    assert_eq!(pair.view(ViewRole::Dual).viewport().offset().x, 0.0);
}

#[test]
fn pointer_roundtrip_matches_the_viewport_inverse() {
    let mut pair = pair();
    pair.view_mut(ViewRole::Primal).viewport_mut().zoom_by(3.0);
    pair.view_mut(ViewRole::Primal)
        .viewport_mut()
        .set_target_offset(Vec2::new(0.7, -0.3));
    pair.view_mut(ViewRole::Primal).viewport_mut().snap_to_target();

    let plane = Point::new(-0.25, 1.5);
    let response = tap(&mut pair, ViewRole::Primal, plane);
    assert_eq!(response, PointerResponse::Inserted(0));

    let primal = match pair.view(ViewRole::Primal).primitives()[0] {
        Primitive::Point(p) => {
            assert!((p.x - plane.x).abs() < 1e-9);
            assert!((p.y - plane.y).abs() < 1e-9);
            p
        }
        other => panic!("expected a point, got {other:?}"),
    };

    // The dual line carries exactly the primal point's coordinates.
    match pair.view(ViewRole::Dual).primitives()[0] {
        Primitive::Line(line) => {
            assert_eq!(line.slope, primal.x);
            assert_eq!(line.intercept, primal.y);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

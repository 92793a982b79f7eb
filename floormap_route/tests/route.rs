// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `floormap_route` crate.
//!
//! These exercise a full position-update cycle the way a map controller
//! drives it: goals go to the engine in pixel space, the returned route is
//! sliced against the live position and converted for rendering.

use floormap_convert::{CoordinateConverter, FloorMetadata, GeoPoint};
use floormap_route::{Goal, GoalKind, GoalSet, Route, Trail, slice_from};
use kurbo::Point;

fn converter() -> CoordinateConverter {
    CoordinateConverter::new(FloorMetadata::new(1, 40.0, 20.0, 10.0)).unwrap()
}

#[test]
fn goal_roundtrips_through_pixel_space() {
    let converter = converter();
    let goal = Goal {
        id: "milk".into(),
        position: Point::new(12.0, 5.0),
        kind: GoalKind::Target,
        floor_id: 1,
    };

    let pixel = goal.to_pixel_space(&converter);
    // y flips against the 20 m floor height at 10 px/m.
    assert_eq!(pixel.position, Point::new(120.0, 150.0));
    assert_eq!(pixel.id, goal.id);
    assert_eq!(pixel.kind, goal.kind);

    let back = pixel.to_meter_space(&converter);
    assert!((back.position - goal.position).hypot() < 1e-9);
}

#[test]
fn only_active_floor_goals_reach_the_engine() {
    let converter = converter();
    let mut goals = GoalSet::new();
    goals.extend([
        Goal {
            id: "entrance".into(),
            position: Point::new(0.0, 0.0),
            kind: GoalKind::Start,
            floor_id: 1,
        },
        Goal {
            id: "upstairs".into(),
            position: Point::new(3.0, 3.0),
            kind: GoalKind::Target,
            floor_id: 2,
        },
    ]);

    let engine_goals: Vec<Goal> = goals
        .on_floor(1)
        .into_iter()
        .map(|g| g.to_pixel_space(&converter))
        .collect();
    assert_eq!(engine_goals.len(), 1);
    assert_eq!(engine_goals[0].id, "entrance");
}

#[test]
fn position_update_slices_and_converts_the_route() {
    let converter = converter();

    // Engine route in pixel space: along the raster top, then down.
    let body = [
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(200.0, 100.0),
    ];
    let sliced = slice_from(&body, Some(Point::new(80.0, 30.0)));
    assert_eq!(sliced[0], Point::new(80.0, 0.0));

    let route = Route {
        head: sliced,
        body: Vec::new(),
        tail: Vec::new(),
    };
    let geo = route.to_geo(&converter);
    assert_eq!(geo.head.len(), 3);

    // The synthesized split vertex converts like any other pixel point.
    assert_eq!(geo.head[0], converter.pixel_point_to_geo(Point::new(80.0, 0.0)));
    // Slicing an already-sliced route is a no-op.
    let again = slice_from(&route.head, Some(Point::new(80.0, 30.0)));
    assert_eq!(again, route.head);
}

#[test]
fn trail_follows_the_puck_until_relocation() {
    let mut trail = Trail::new();
    for step in 0..5 {
        trail.push(Point::new(f64::from(step) * 0.4, 0.0));
    }
    assert_eq!(trail.points().len(), 5);

    // Re-localization on floor change: the old breadcrumb is meaningless.
    trail.push(Point::new(30.0, 10.0));
    assert_eq!(trail.points().len(), 1);
}

#[test]
fn geo_route_parts_stay_independent() {
    let converter = converter();
    let route = Route {
        head: vec![Point::new(0.0, 200.0)],
        body: vec![Point::new(100.0, 200.0)],
        tail: vec![Point::new(400.0, 200.0)],
    };
    let geo = route.to_geo(&converter);

    let expect = |p: Point| -> GeoPoint { converter.pixel_point_to_geo(p) };
    assert_eq!(geo.head, [expect(Point::new(0.0, 200.0))]);
    assert_eq!(geo.body, [expect(Point::new(100.0, 200.0))]);
    assert_eq!(geo.tail, [expect(Point::new(400.0, 200.0))]);
}

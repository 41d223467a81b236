#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::rect(
        Uuid::new_v4(),
        RectProps { width: w, height: h, position: Some(Vector::new(x, y)), ..Default::default() },
    )
}

fn circle(x: f64, y: f64, radius: f64) -> Shape {
    Shape::circle(
        Uuid::new_v4(),
        CircleProps {
            radius: Some(radius),
            position: Some(Vector::new(x, y)),
            ..Default::default()
        },
    )
}

// --- Construction defaults ---

#[test]
fn rect_defaults() {
    let shape = Shape::rect(Uuid::new_v4(), RectProps { width: 5.0, height: 6.0, ..Default::default() });
    assert_eq!(shape.position, Vector::ZERO);
    assert_eq!(shape.z_index, 0);
    assert_eq!(shape.rotation, 0.0);
    assert!(shape.visible);
    assert!(!shape.dragging);
    assert_eq!(shape.kind(), ShapeKind::Rect);
}

#[test]
fn circle_defaults() {
    let shape = Shape::circle(Uuid::new_v4(), CircleProps::default());
    assert_eq!(shape.kind(), ShapeKind::Circle);
    match &shape.geometry {
        Geometry::Circle { radius, color } => {
            assert_eq!(*radius, 10.0);
            assert_eq!(color, "#fff");
        }
        Geometry::Rect { .. } => panic!("expected circle geometry"),
    }
}

#[test]
fn props_override_every_default() {
    let shape = Shape::rect(
        Uuid::new_v4(),
        RectProps {
            width: 10.0,
            height: 20.0,
            position: Some(Vector::new(1.0, 2.0)),
            z_index: Some(-3),
            rotation: Some(0.5),
            visible: Some(false),
            dragging: Some(true),
            color: Some("red".to_owned()),
            border_width: Some(2.0),
            border_color: Some("blue".to_owned()),
        },
    );
    assert_eq!(shape.position, Vector::new(1.0, 2.0));
    assert_eq!(shape.z_index, -3);
    assert_eq!(shape.rotation, 0.5);
    assert!(!shape.visible);
    assert!(shape.dragging);
    match &shape.geometry {
        Geometry::Rect { color, border_width, border_color, .. } => {
            assert_eq!(color, "red");
            assert_eq!(*border_width, 2.0);
            assert_eq!(border_color, "blue");
        }
        Geometry::Circle { .. } => panic!("expected rect geometry"),
    }
}

// --- Hit tests ---

#[test]
fn rect_contains_interior_and_edges() {
    let shape = rect(10.0, 10.0, 100.0, 50.0);
    assert!(shape.contains(Vector::new(50.0, 30.0)));
    // Boundary is inclusive on all four edges.
    assert!(shape.contains(Vector::new(10.0, 10.0)));
    assert!(shape.contains(Vector::new(110.0, 60.0)));
    assert!(!shape.contains(Vector::new(9.9, 30.0)));
    assert!(!shape.contains(Vector::new(50.0, 60.1)));
}

#[test]
fn circle_contains_by_distance() {
    let shape = circle(100.0, 100.0, 50.0);
    assert!(shape.contains(Vector::new(100.0, 100.0)));
    assert!(shape.contains(Vector::new(120.0, 120.0)));
    // The rim itself counts.
    assert!(shape.contains(Vector::new(150.0, 100.0)));
    assert!(!shape.contains(Vector::new(150.1, 100.0)));
    // Corner of the bounding box is outside the disc.
    assert!(!shape.contains(Vector::new(140.0, 140.0)));
}

#[test]
fn circle_ignores_rotation() {
    let mut shape = circle(0.0, 0.0, 10.0);
    shape.rotation = 1.0;
    assert!(shape.contains(Vector::new(9.0, 0.0)));
    assert!(!shape.contains(Vector::new(11.0, 0.0)));
}

#[test]
fn rotated_rect_hit_test_follows_the_rotation() {
    // Unit-ish rect rotated 90°: its painted footprint moves from +x to +y
    // territory around the pivot.
    let mut shape = rect(0.0, 0.0, 100.0, 10.0);
    shape.rotation = FRAC_PI_2;
    assert!(!shape.contains(Vector::new(50.0, 5.0)));
    assert!(shape.contains(Vector::new(-5.0, 50.0)));
}

#[test]
fn rect_rotated_45_degrees() {
    let mut shape = rect(0.0, 0.0, 100.0, 100.0);
    shape.rotation = FRAC_PI_4;
    // Along the rotated diagonal.
    assert!(shape.contains(Vector::new(0.0, 70.0)));
    // The unrotated corner region is no longer covered.
    assert!(!shape.contains(Vector::new(90.0, 5.0)));
}

#[test]
fn full_turn_rotation_matches_unrotated_hits() {
    let plain = rect(10.0, 20.0, 60.0, 40.0);
    let mut turned = plain.clone();
    turned.rotation = TAU;
    for point in [
        Vector::new(10.0, 20.0),
        Vector::new(40.0, 40.0),
        Vector::new(70.0, 60.0),
        Vector::new(75.0, 40.0),
        Vector::new(5.0, 5.0),
    ] {
        assert_eq!(plain.contains(point), turned.contains(point), "point {point:?}");
    }
}

#[test]
fn rotation_sweep_keeps_the_pivot_inside() {
    // `position` is the rotation pivot and a corner of the rect; a point
    // just inside that corner must stay inside at every angle.
    let mut shape = rect(0.0, 0.0, 100.0, 100.0);
    for step in 0..16 {
        shape.rotation = f64::from(step) * PI / 8.0;
        let (sin, cos) = (shape.rotation).sin_cos();
        // The rotated image of local point (1, 1).
        let inside = Vector::new(cos - sin, sin + cos);
        assert!(shape.contains(inside), "rotation {}", shape.rotation);
    }
}

// --- Bounding boxes ---

#[test]
fn rect_bounding_box_is_its_own_extent() {
    let shape = rect(10.0, 20.0, 30.0, 40.0);
    assert_eq!(shape.bounding_box(), (Vector::new(10.0, 20.0), 30.0, 40.0));
}

#[test]
fn circle_bounding_box_circumscribes() {
    let shape = circle(100.0, 100.0, 25.0);
    assert_eq!(shape.bounding_box(), (Vector::new(75.0, 75.0), 50.0, 50.0));
}

#[test]
fn in_boundary_overlap_and_miss() {
    let shape = rect(10.0, 10.0, 20.0, 20.0);
    assert!(shape.in_boundary(0.0, 0.0, 100.0, 100.0));
    assert!(shape.in_boundary(25.0, 25.0, 100.0, 100.0));
    assert!(!shape.in_boundary(50.0, 50.0, 10.0, 10.0));
    // Touching edges count as overlap.
    assert!(shape.in_boundary(30.0, 10.0, 5.0, 5.0));
}

// --- Snapshots ---

#[test]
fn rect_snapshot_is_sparse_over_circle_fields() {
    let raw = rect(1.0, 2.0, 30.0, 40.0).raw_data();
    assert_eq!(raw.kind, ShapeKind::Rect);
    assert_eq!(raw.width, Some(30.0));
    assert_eq!(raw.height, Some(40.0));
    assert_eq!(raw.border_width, Some(0.0));
    assert_eq!(raw.radius, None);
}

#[test]
fn circle_snapshot_is_sparse_over_rect_fields() {
    let raw = circle(5.0, 5.0, 12.0).raw_data();
    assert_eq!(raw.kind, ShapeKind::Circle);
    assert_eq!(raw.radius, Some(12.0));
    assert_eq!(raw.width, None);
    assert_eq!(raw.border_color, None);
}

#[test]
fn snapshot_round_trip_reconstructs_the_shape() {
    let mut original = rect(3.0, 4.0, 50.0, 60.0);
    original.rotation = 0.3;
    original.z_index = 7;
    original.visible = false;
    let rebuilt = Shape::from_raw(&original.raw_data()).unwrap();
    assert_eq!(rebuilt, original);
}

#[test]
fn snapshot_survives_the_json_wire() {
    let original = circle(9.0, 9.0, 33.0);
    let json = serde_json::to_string(&original.raw_data()).unwrap();
    // Sparse fields stay off the wire entirely.
    assert!(!json.contains("radius\":null"));
    assert!(!json.contains("width"));
    let raw = RawShape::from_json(&json).unwrap();
    assert_eq!(Shape::from_raw(&raw).unwrap(), original);
}

#[test]
fn from_raw_requires_kind_geometry() {
    let mut raw = rect(0.0, 0.0, 10.0, 10.0).raw_data();
    raw.height = None;
    let err = Shape::from_raw(&raw).unwrap_err();
    assert!(matches!(err, EngineError::MissingField { kind: "rect", field: "height" }));

    let mut raw = circle(0.0, 0.0, 10.0).raw_data();
    raw.radius = None;
    let err = Shape::from_raw(&raw).unwrap_err();
    assert!(matches!(err, EngineError::MissingField { kind: "circle", field: "radius" }));
}

#[test]
fn from_raw_backfills_optional_style() {
    let mut raw = rect(0.0, 0.0, 10.0, 10.0).raw_data();
    raw.color = None;
    raw.border_color = None;
    let rebuilt = Shape::from_raw(&raw).unwrap();
    match &rebuilt.geometry {
        Geometry::Rect { color, border_color, .. } => {
            assert_eq!(color, "white");
            assert_eq!(border_color, "transparent");
        }
        Geometry::Circle { .. } => panic!("expected rect geometry"),
    }
}

#[test]
fn from_json_flags_unknown_kinds_as_not_implemented() {
    let json = format!(
        r#"{{"id":"{}","kind":"hexagon","position":{{"x":0.0,"y":0.0}},"rotation":0.0,"z_index":0,"dragging":false,"visible":true}}"#,
        Uuid::new_v4()
    );
    let err = RawShape::from_json(&json).unwrap_err();
    match err {
        EngineError::NotImplemented(kind) => assert_eq!(kind, "hexagon"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_flags_malformed_payloads() {
    assert!(matches!(RawShape::from_json("not json"), Err(EngineError::Snapshot(_))));
    // Valid JSON, valid kind, but common fields are missing.
    assert!(matches!(
        RawShape::from_json(r#"{"kind":"rect"}"#),
        Err(EngineError::Snapshot(_))
    ));
}

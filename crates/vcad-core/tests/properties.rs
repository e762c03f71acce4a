//! 几何性质测试

use proptest::prelude::*;
use vcad_core::line::{to_cartesian, to_polar};
use vcad_core::prelude::*;

fn state(orientation: Orientation, inverted: bool, angle: f64, gc: Point3) -> OrientationState {
    OrientationState::new(orientation, FacingDirection::Right, inverted, angle, gc)
}

proptest! {
    #[test]
    fn polar_round_trip_preserves_distance_and_angle(
        ox in -1000.0f64..1000.0,
        oy in -1000.0f64..1000.0,
        angle in -720.0f64..=720.0,
        distance in 0.01f64..1000.0,
    ) {
        let origin = Point2::new(ox, oy);
        let p = to_cartesian(&origin, angle, distance);
        let (angle_back, distance_back) = to_polar(&origin, &p);

        prop_assert!((distance_back - distance).abs() < 1e-6);
        let diff = (angle_back - angle).rem_euclid(360.0);
        prop_assert!(diff < 1e-5 || 360.0 - diff < 1e-5, "angle {} came back as {}", angle, angle_back);
    }

    #[test]
    fn to_venue_is_idempotent(
        vertical in any::<bool>(),
        inverted in any::<bool>(),
        angle in -360.0f64..360.0,
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        z in -10.0f64..10.0,
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let s = state(orientation, inverted, angle, Point3::new(1.0, -2.0, 0.5));
        let offset = Vector3::new(x, y, z);

        prop_assert_eq!(s.to_venue(&offset), s.to_venue(&offset));
    }

    #[test]
    fn vertical_matrix_matches_offset_path(
        inverted in any::<bool>(),
        angle in -360.0f64..360.0,
        gx in -50.0f64..50.0,
        gy in -50.0f64..50.0,
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        z in -10.0f64..10.0,
    ) {
        // 竖直朝向的元素平面坐标为 (x, z)
        let s = state(Orientation::Vertical, inverted, angle, Point3::new(gx, gy, 0.0));
        let by_offset = s.to_venue_planar(&Vector3::new(x, y, z));
        let by_matrix = s.element_to_venue_transform().transform_point(&Point2::new(x, z));

        prop_assert!((by_offset - by_matrix).norm() < 1e-9);
    }

    #[test]
    fn horizontal_upright_matrix_matches_offset_path(
        angle in -360.0f64..360.0,
        x in -10.0f64..10.0,
        y in -10.0f64..10.0,
        z in -10.0f64..10.0,
    ) {
        let s = state(Orientation::Horizontal, false, angle, Point3::new(3.0, 4.0, 0.0));
        let by_offset = s.to_venue_planar(&Vector3::new(x, y, z));
        let by_matrix = s.element_to_venue_transform().transform_point(&Point2::new(x, y));

        prop_assert!((by_offset - by_matrix).norm() < 1e-9);
    }

    #[test]
    fn midpoint_always_picked(
        x1 in -100.0f64..100.0,
        y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0,
        y2 in -100.0f64..100.0,
        width in 0.1f64..500.0,
        height in 0.1f64..500.0,
    ) {
        let mut line = CartesianLine::default();
        line.set_line_points(Point2::new(x1, y1), Point2::new(x2, y2));
        let context = Extents2D::new(0.0, 0.0, width, height);
        let midpoint = line.line().midpoint();

        prop_assert!(line.contains(&midpoint, &context, false));
    }

    #[test]
    fn distant_point_never_picked(
        x1 in -100.0f64..100.0,
        y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0,
        y2 in -100.0f64..100.0,
        width in 0.1f64..500.0,
        height in 0.1f64..500.0,
        gap in 0.01f64..10.0,
    ) {
        let mut line = CartesianLine::default();
        line.set_line_points(Point2::new(x1, y1), Point2::new(x2, y2));
        let context = Extents2D::new(0.0, 0.0, width, height);
        let radius = 0.5 * PICK_DIAMETER_RATIO * width.min(height);
        let point = Point2::new(x1.max(x2) + radius + gap, y1);

        prop_assert!(!line.contains(&point, &context, false));
    }
}

#[test]
fn horizontal_inverted_matrix_mirrors_but_offset_does_not() {
    let s = state(Orientation::Horizontal, true, 0.0, Point3::origin());

    let by_offset = s.to_venue_planar(&Vector3::new(1.0, 2.0, 3.0));
    let by_matrix = s
        .element_to_venue_transform()
        .transform_point(&Point2::new(1.0, 2.0));

    assert_eq!(by_offset, Point2::new(1.0, 2.0));
    assert_eq!(by_matrix, Point2::new(1.0, -2.0));
}

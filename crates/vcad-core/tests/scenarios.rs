//! 端到端场景：拾取、最近对象、唯一名称、拖动边界、质心

use vcad_core::prelude::*;
use vcad_core::uniquefier::resolve_unique_label;

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> CartesianLine {
    let mut line = CartesianLine::default();
    line.set_line_points(Point2::new(x1, y1), Point2::new(x2, y2));
    line
}

#[test]
fn orientation_projection_examples() {
    let offset = Vector3::new(1.0, 2.0, 3.0);
    let planar = |orientation, inverted| {
        OrientationState::new(orientation, FacingDirection::Right, inverted, 0.0, Point3::origin())
            .to_venue_planar(&offset)
    };

    assert_eq!(planar(Orientation::Horizontal, false), Point2::new(1.0, 2.0));
    assert_eq!(planar(Orientation::Vertical, false), Point2::new(1.0, 3.0));
    assert_eq!(planar(Orientation::Vertical, true), Point2::new(1.0, -3.0));
}

#[test]
fn equidistant_candidates_keep_first() {
    let a = line(0.0, 0.0, 10.0, 0.0);
    let b = line(0.0, 10.0, 10.0, 10.0);
    let click = Point2::new(5.0, 5.0);

    assert_eq!(a.distance_to(&click), 5.0);
    assert_eq!(b.distance_to(&click), 5.0);
    assert!(!a.is_closer_than(Some(&b), &click));
    assert!(!b.is_closer_than(Some(&a), &click));
    assert!(a.is_closer_than(None, &click));

    let mut objects = ObjectCollection::new();
    objects.insert(GraphicalObject::from(a));
    objects.insert(GraphicalObject::from(b));
    // 拾取半径足够大，两者都命中
    let view = Extents2D::new(0.0, 0.0, 1000.0, 1000.0);
    assert_eq!(objects.pick(&click, &view, &ModelContext::default()), Some(0));
}

#[test]
fn surface_name_collision_gets_appendix() {
    let surfaces = [Surface::numbered(1), Surface::numbered(2)];
    let label = resolve_unique_label(
        &surfaces,
        Some(1),
        Some("Surface 1"),
        "Surface 2",
        &PlainNumberFormat,
    );
    assert_eq!(label, "Surface 1 (2)");
}

#[test]
fn drag_leaving_bounds_is_rejected() {
    let mut segment = line(0.0, 0.0, 5.0, 5.0);
    let bounds = Extents2D::new(0.0, 0.0, 10.0, 10.0);

    assert!(!segment.is_drag_target_within_bounds(-1.0, 0.0, &bounds));
    assert_eq!(
        segment.try_drag(-1.0, 0.0, &bounds),
        Err(ModelError::DragOutOfBounds { dx: -1.0, dy: 0.0 })
    );
    assert_eq!(segment.line(), LineSegment::from_coords(0.0, 0.0, 5.0, 5.0));
}

#[test]
fn polar_line_picked_through_collection() {
    let mut polar = PolarLine::default();
    polar.set_origin(Point2::new(10.0, 10.0));
    polar.set_start(0.0, 2.0);
    polar.set_end(90.0, 2.0);

    let mut objects = ObjectCollection::new();
    objects.insert(GraphicalObject::from(line(0.0, 0.0, 1.0, 0.0)));
    objects.insert(GraphicalObject::from(polar));

    // 从 (12,10) 到 (10,12) 的中点
    let view = Extents2D::new(0.0, 0.0, 40.0, 20.0);
    assert_eq!(objects.pick(&Point2::new(11.0, 11.0), &view, &ModelContext::default()), Some(1));
}

#[test]
fn solid_cog_marker_in_venue() {
    let frame = OrientationState::at_reference_point(
        Orientation::Horizontal,
        FacingDirection::Left,
        false,
        90.0,
        Point2::new(4.0, 4.0),
    );
    let body = SolidBody::new(
        "Subwoofer",
        LayerId::DEFAULT,
        frame,
        PointMass::new(Vector3::new(1.0, 0.0, 0.0), 80.0),
    );

    let cog = body.cog_in_planar_coordinates();
    assert!((cog - Point2::new(4.0, 5.0)).norm() < 1e-12);

    let [h, v] = body.cog_marker(&ModelContext::default());
    assert!((h.length() - 0.15).abs() < 1e-12);
    assert!((v.midpoint() - cog).norm() < 1e-12);
}

#[test]
fn cog_marker_size_follows_config() {
    let body = SolidBody::with_context(
        &ModelContext::default(),
        PointMass::new(Vector3::zeros(), 10.0),
    );
    let config = ModelConfig::from_toml_str("cog_marker_size = 0.4").expect("parse config");
    let context = ModelContext::new(LayerId::DEFAULT, config);

    let [h, v] = body.cog_marker(&context);
    assert!((h.length() - 0.4).abs() < 1e-12);
    assert!((v.length() - 0.4).abs() < 1e-12);
}

#[test]
fn selection_drag_limited_by_configured_drawing_limits() {
    let mut objects = ObjectCollection::new();
    objects.insert(GraphicalObject::from(line(1.0, 1.0, 2.0, 2.0)));
    objects.select_all();
    let context = ModelContext::default();

    // 默认绘图界限为 40 x 20
    assert!(objects.drag_selection_within_limits(30.0, 0.0, &context).is_ok());
    assert!(objects.drag_selection_within_limits(0.0, 18.5, &context).is_err());
    assert_eq!(
        objects.get(0).map(|o| o.line()),
        Some(LineSegment::from_coords(31.0, 1.0, 32.0, 2.0))
    );
}

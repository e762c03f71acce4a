//! 实体（带朝向和质量属性的物理对象）
//!
//! 实体自身只保存标签、图层、朝向状态和质量能力。质心在场馆中的
//! 位置由朝向变换与质量属性组合得到，不单独缓存。

use crate::capability::{Draggable, Labeled, MassBearing, Orientable, Positionable};
use crate::config::ModelContext;
use crate::frame::OrientationState;
use crate::layer::LayerId;
use crate::mass::MassProperties;
use crate::math::{Point2, Point3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidBody<M> {
    pub label: String,
    pub layer: LayerId,
    frame: OrientationState,
    pub mass: M,
}

impl<M: MassProperties> SolidBody<M> {
    pub const LABEL_DEFAULT: &'static str = "Solid";

    pub fn new(label: impl Into<String>, layer: LayerId, frame: OrientationState, mass: M) -> Self {
        Self {
            label: label.into(),
            layer,
            frame,
            mass,
        }
    }

    /// 默认朝向、GC 在原点
    pub fn with_context(context: &ModelContext, mass: M) -> Self {
        Self::new(
            Self::LABEL_DEFAULT,
            context.default_layer,
            OrientationState::default(),
            mass,
        )
    }
}

impl<M: MassProperties> Labeled for SolidBody<M> {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn default_label(&self) -> String {
        Self::LABEL_DEFAULT.to_string()
    }
}

impl<M: MassProperties> Positionable for SolidBody<M> {
    fn reference_point(&self) -> Point2 {
        self.frame.reference_point()
    }

    fn set_reference_point(&mut self, point: Point2) {
        self.frame.set_reference_point(point);
    }
}

impl<M: MassProperties> Orientable for SolidBody<M> {
    fn orientation_state(&self) -> &OrientationState {
        &self.frame
    }

    fn orientation_state_mut(&mut self) -> &mut OrientationState {
        &mut self.frame
    }
}

impl<M: MassProperties> MassBearing for SolidBody<M> {
    type Mass = M;

    fn mass_properties(&self) -> &M {
        &self.mass
    }
}

impl<M: MassProperties> Draggable for SolidBody<M> {
    fn defining_points(&self) -> Vec<Point2> {
        vec![self.frame.gc_in_planar()]
    }

    /// 平移 GC 的 X/Y，Z 保持不变
    fn drag(&mut self, dx: f64, dy: f64) {
        let gc = self.frame.gc_in_venue();
        self.frame
            .set_gc_in_venue(Point3::new(gc.x + dx, gc.y + dy, gc.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extents::Extents2D;
    use crate::frame::{FacingDirection, Orientation};
    use crate::mass::PointMass;
    use crate::math::{approx_eq, points_approx_eq, Vector3};

    fn solid(orientation: Orientation, inverted: bool, angle: f64) -> SolidBody<PointMass> {
        let frame = OrientationState::new(
            orientation,
            FacingDirection::Right,
            inverted,
            angle,
            Point3::new(10.0, 5.0, 2.0),
        );
        SolidBody::new(
            "Cabinet",
            LayerId::DEFAULT,
            frame,
            PointMass::new(Vector3::new(0.0, 0.5, -0.25), 120.0),
        )
    }

    #[test]
    fn test_cog_composes_with_frame() {
        let body = solid(Orientation::Vertical, false, 0.0);
        let cog = body.cog_in_venue_coordinates();

        // 竖直朝向交换 Y/Z
        assert!(approx_eq(cog.x, 10.0));
        assert!(approx_eq(cog.y, 4.75));
        assert!(approx_eq(cog.z, 2.5));
        assert!(points_approx_eq(
            &body.cog_in_planar_coordinates(),
            &Point2::new(10.0, 4.75)
        ));
        assert_eq!(body.weight_kg(), 120.0);
        assert!(body.is_cog_valid());
    }

    #[test]
    fn test_cog_marker_centered_on_planar_cog() {
        let body = solid(Orientation::Horizontal, true, 90.0);
        let cog = body.cog_in_planar_coordinates();
        let [h, v] = body.cog_marker_segments(0.15);

        assert!(points_approx_eq(&h.midpoint(), &cog));
        assert!(points_approx_eq(&v.midpoint(), &cog));
        assert!(approx_eq(h.length(), 0.15));
    }

    #[test]
    fn test_drag_keeps_z() {
        let mut body = solid(Orientation::Vertical, false, 30.0);
        body.drag(-2.0, 1.0);

        assert_eq!(body.orientation_state().gc_in_venue(), Point3::new(8.0, 6.0, 2.0));
        assert_eq!(body.orientation_state().angle_degrees(), 30.0);
    }

    #[test]
    fn test_drag_bounds_use_gc() {
        let mut body = solid(Orientation::Vertical, false, 0.0);
        let bounds = Extents2D::new(0.0, 0.0, 12.0, 12.0);

        assert!(body.try_drag(2.0, 0.0, &bounds).is_ok());
        assert!(body.try_drag(0.5, 0.0, &bounds).is_err());
        assert_eq!(body.reference_point(), Point2::new(12.0, 5.0));
    }

    #[test]
    fn test_with_context_defaults() {
        let body = SolidBody::with_context(&ModelContext::default(), PointMass::default());
        assert_eq!(body.orientation_state(), &OrientationState::default());
        assert_eq!(body.label(), "Solid");
        assert!(!body.is_cog_valid());
    }

    #[test]
    fn test_orientation_changed_through_setters() {
        let mut body = solid(Orientation::Vertical, false, 0.0);
        body.orientation_state_mut().set_angle_degrees(90.0);

        // 旋转后元素平面 (1,0) 落在 GC 正上方
        let venue = body.element_to_venue_transform().transform_point(&Point2::new(1.0, 0.0));
        assert!(points_approx_eq(&venue, &Point2::new(10.0, 6.0)));
        let element = body.venue_to_element(&venue).unwrap();
        assert!(points_approx_eq(&element, &Point2::new(1.0, 0.0)));
        assert_eq!(body.reference_point(), Point2::new(10.0, 5.0));
    }
}

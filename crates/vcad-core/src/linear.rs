//! 线性对象
//!
//! 线性对象本质上是一条可以兼作投影器的二维线段。投影器在主线段之外
//! 追加一条基线和若干竖直落线，用作投影区域的视觉提示。

use crate::capability::{Draggable, Labeled, Pickable, Positionable};
use crate::layer::LayerId;
use crate::line::{self, LineSegment, PathElement};
use crate::math::Point2;
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// 线性对象的共享属性
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearAttributes {
    pub label: String,
    pub layer: LayerId,
    pub use_as_projector: bool,
    /// 投影区域数量（0 按 1 处理）
    pub number_of_projection_zones: u32,
}

impl LinearAttributes {
    pub const USE_AS_PROJECTOR_DEFAULT: bool = false;
    pub const NUMBER_OF_PROJECTION_ZONES_DEFAULT: u32 = 1;

    pub fn new(label: impl Into<String>, layer: LayerId) -> Self {
        Self {
            label: label.into(),
            layer,
            use_as_projector: Self::USE_AS_PROJECTOR_DEFAULT,
            number_of_projection_zones: Self::NUMBER_OF_PROJECTION_ZONES_DEFAULT,
        }
    }

    /// 实际参与构造的区域数量
    pub fn effective_projection_zones(&self) -> u32 {
        self.number_of_projection_zones.max(1)
    }
}

/// 投影器的辅助线：基线和 `zones + 1` 条落线
///
/// 基线位于主线段较低端点的高度，从 x1 延伸到 x2；落线从基线垂直
/// 连到主线段上均匀分布的点。
pub fn projector_lines(line: &LineSegment, zones: u32) -> Vec<LineSegment> {
    let zones = zones.max(1);
    let baseline_y = line.start_y().min(line.end_y());

    let mut lines = Vec::with_capacity(zones as usize + 2);
    lines.push(LineSegment::from_coords(
        line.start_x(),
        baseline_y,
        line.end_x(),
        baseline_y,
    ));

    let x_delta = (line.end_x() - line.start_x()) / f64::from(zones);
    let y_delta = (line.end_y() - line.start_y()) / f64::from(zones);
    for i in 0..=zones {
        let t = f64::from(i);
        let x = line.start_x() + x_delta * t;
        let slope_y = line.start_y() + y_delta * t;
        lines.push(LineSegment::from_coords(x, baseline_y, x, slope_y));
    }
    lines
}

/// 线性对象
pub trait LinearObject: Labeled + Positionable {
    /// 当前的笛卡尔线段
    fn line(&self) -> LineSegment;

    /// 以笛卡尔端点重设线段
    fn set_line(&mut self, line: LineSegment);

    fn attributes(&self) -> &LinearAttributes;

    fn attributes_mut(&mut self) -> &mut LinearAttributes;

    /// 线段角度（度）
    fn angle_degrees(&self) -> f64;

    /// 按增量平移
    fn translate(&mut self, dx: f64, dy: f64);

    fn p1(&self) -> Point2 {
        self.line().p1
    }

    fn p2(&self) -> Point2 {
        self.line().p2
    }

    fn layer(&self) -> LayerId {
        self.attributes().layer
    }

    fn set_layer(&mut self, layer: LayerId) {
        self.attributes_mut().layer = layer;
    }

    fn use_as_projector(&self) -> bool {
        self.attributes().use_as_projector
    }

    fn set_use_as_projector(&mut self, use_as_projector: bool) {
        self.attributes_mut().use_as_projector = use_as_projector;
    }

    fn number_of_projection_zones(&self) -> u32 {
        self.attributes().number_of_projection_zones
    }

    fn set_number_of_projection_zones(&mut self, zones: u32) {
        self.attributes_mut().number_of_projection_zones = zones;
    }

    /// 全部构造线：主线段，投影器时再加基线和落线
    fn construct_lines(&self) -> Vec<LineSegment> {
        let main = self.line();
        let mut lines = vec![main];
        if self.use_as_projector() {
            lines.extend(projector_lines(
                &main,
                self.attributes().effective_projection_zones(),
            ));
        }
        lines
    }

    /// 构造线展开为路径元素
    fn path_elements(&self) -> Vec<PathElement> {
        line::path_elements(&self.construct_lines())
    }

    /// 对两端点应用仿射变换
    fn transform(&mut self, transform: &Transform2D) {
        let transformed = self.line().transformed(transform);
        self.set_line(transformed);
    }

    /// 绕中心旋转相对角度（度）
    fn rotate_about(&mut self, center: Point2, angle_degrees: f64) {
        self.transform(&Transform2D::rotation_around(
            center,
            angle_degrees.to_radians(),
        ));
    }
}

impl<T: LinearObject> Pickable for T {
    fn primary_segment(&self) -> LineSegment {
        self.line()
    }

    fn pick_segments(&self) -> Vec<LineSegment> {
        self.construct_lines()
    }
}

impl<T: LinearObject> Draggable for T {
    fn defining_points(&self) -> Vec<Point2> {
        let line = self.line();
        vec![line.p1, line.p2]
    }

    fn drag(&mut self, dx: f64, dy: f64) {
        self.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_projector_lines_single_zone() {
        let main = LineSegment::from_coords(0.0, 2.0, 4.0, 6.0);
        let lines = projector_lines(&main, 1);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], LineSegment::from_coords(0.0, 2.0, 4.0, 2.0));
        assert_eq!(lines[1], LineSegment::from_coords(0.0, 2.0, 0.0, 2.0));
        assert_eq!(lines[2], LineSegment::from_coords(4.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn test_projector_lines_even_spacing() {
        let main = LineSegment::from_coords(0.0, 4.0, 4.0, 0.0);
        let lines = projector_lines(&main, 4);

        assert_eq!(lines.len(), 6);
        // 基线取较低端点的高度
        assert!(approx_eq(lines[0].start_y(), 0.0));
        for (i, drop) in lines[1..].iter().enumerate() {
            assert!(approx_eq(drop.start_x(), i as f64));
            assert!(approx_eq(drop.end_y(), 4.0 - i as f64));
        }
    }

    #[test]
    fn test_zero_zones_treated_as_one() {
        let main = LineSegment::from_coords(0.0, 0.0, 2.0, 2.0);
        assert_eq!(projector_lines(&main, 0), projector_lines(&main, 1));

        let mut attributes = LinearAttributes::new("x", LayerId::DEFAULT);
        attributes.number_of_projection_zones = 0;
        assert_eq!(attributes.effective_projection_zones(), 1);
    }
}

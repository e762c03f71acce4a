//! 线段几何
//!
//! 极坐标与笛卡尔坐标互转、线段访问器、点到线段距离以及线段与矩形求交。
//! 角度一律使用度数对外，内部计算转换为弧度。

use crate::extents::Extents2D;
use crate::math::{Point2, Vector2};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// 由参考点、角度（度）和距离求笛卡尔坐标
///
/// 距离为 0 时返回参考点本身；负距离表示反方向偏移。
pub fn to_cartesian(origin: &Point2, angle_degrees: f64, distance: f64) -> Point2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Point2::new(origin.x + distance * cos, origin.y + distance * sin)
}

/// 求点相对参考点的极坐标，返回 `(角度（度）, 距离)`
///
/// 点与参考点重合时角度为 0（atan2(0, 0)）。
pub fn to_polar(origin: &Point2, point: &Point2) -> (f64, f64) {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    (dy.atan2(dx).to_degrees(), dx.hypot(dy))
}

/// 线段（两端点始终完整定义）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point2,
    pub p2: Point2,
}

impl LineSegment {
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// 由起点、角度（度）和长度创建
    pub fn from_polar(p1: Point2, angle_degrees: f64, distance: f64) -> Self {
        Self::new(p1, to_cartesian(&p1, angle_degrees, distance))
    }

    pub fn start_x(&self) -> f64 {
        self.p1.x
    }

    pub fn start_y(&self) -> f64 {
        self.p1.y
    }

    pub fn end_x(&self) -> f64 {
        self.p2.x
    }

    pub fn end_y(&self) -> f64 {
        self.p2.y
    }

    /// 线段长度
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// 线段中点
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }

    /// 线段方向角（度）；零长度线段为 0
    pub fn angle_degrees(&self) -> f64 {
        to_polar(&self.p1, &self.p2).0
    }

    /// 点到线段的距离（投影钳制在线段内）
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        let v = self.p2 - self.p1;
        let w = point - self.p1;

        let c1 = w.dot(&v);
        if c1 <= 0.0 {
            return w.norm();
        }

        let c2 = v.dot(&v);
        if c2 <= c1 {
            return (point - self.p2).norm();
        }

        let pb = self.p1 + v * (c1 / c2);
        (point - pb).norm()
    }

    /// 线段与轴对齐矩形是否相交（含边界，Liang-Barsky 裁剪）
    ///
    /// 宽或高为负的矩形视为空。
    pub fn intersects(&self, rect: &Extents2D) -> bool {
        if !rect.is_valid() {
            return false;
        }

        let d: Vector2 = self.p2 - self.p1;
        let checks = [
            (-d.x, self.p1.x - rect.min_x()),
            (d.x, rect.max_x() - self.p1.x),
            (-d.y, self.p1.y - rect.min_y()),
            (d.y, rect.max_y() - self.p1.y),
        ];

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return false;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return false;
                }
                t1 = t1.min(r);
            }
        }
        true
    }

    /// 平移后的线段
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let delta = Vector2::new(dx, dy);
        Self::new(self.p1 + delta, self.p2 + delta)
    }

    /// 应用仿射变换后的线段
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        Self::new(
            transform.transform_point(&self.p1),
            transform.transform_point(&self.p2),
        )
    }
}

impl Default for LineSegment {
    fn default() -> Self {
        Self::from_coords(0.0, 0.0, 1.0, 1.0)
    }
}

/// 极坐标线段状态
///
/// 以倾角仪位置为参考点，起点和终点各由角度（度）和距离描述。
/// 角度不做归一化，距离可以为负。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarLineState {
    /// 参考点（倾角仪位置）
    pub origin: Point2,
    pub start_angle_degrees: f64,
    pub start_distance: f64,
    pub end_angle_degrees: f64,
    pub end_distance: f64,
}

impl PolarLineState {
    pub const START_ANGLE_DEGREES_DEFAULT: f64 = 0.0;
    pub const START_DISTANCE_DEFAULT: f64 = 1.0;
    pub const END_ANGLE_DEGREES_DEFAULT: f64 = 45.0;
    pub const END_DISTANCE_DEFAULT: f64 = 1.0;

    pub fn new(
        origin: Point2,
        start_angle_degrees: f64,
        start_distance: f64,
        end_angle_degrees: f64,
        end_distance: f64,
    ) -> Self {
        Self {
            origin,
            start_angle_degrees,
            start_distance,
            end_angle_degrees,
            end_distance,
        }
    }

    /// 以给定参考点描述已有线段
    pub fn from_segment(origin: Point2, segment: &LineSegment) -> Self {
        let mut state = Self::new(origin, 0.0, 0.0, 0.0, 0.0);
        state.set_segment(segment);
        state
    }

    /// 两端点夹角（终止角 - 起始角）
    pub fn angle_degrees(&self) -> f64 {
        self.end_angle_degrees - self.start_angle_degrees
    }

    pub fn start_point(&self) -> Point2 {
        to_cartesian(&self.origin, self.start_angle_degrees, self.start_distance)
    }

    pub fn end_point(&self) -> Point2 {
        to_cartesian(&self.origin, self.end_angle_degrees, self.end_distance)
    }

    /// 对应的笛卡尔线段
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.start_point(), self.end_point())
    }

    /// 用笛卡尔端点重新推导两组极坐标，参考点不变
    pub fn set_segment(&mut self, segment: &LineSegment) {
        let (start_angle, start_distance) = to_polar(&self.origin, &segment.p1);
        let (end_angle, end_distance) = to_polar(&self.origin, &segment.p2);
        self.start_angle_degrees = start_angle;
        self.start_distance = start_distance;
        self.end_angle_degrees = end_angle;
        self.end_distance = end_distance;
    }
}

impl Default for PolarLineState {
    fn default() -> Self {
        Self::new(
            Point2::origin(),
            Self::START_ANGLE_DEGREES_DEFAULT,
            Self::START_DISTANCE_DEFAULT,
            Self::END_ANGLE_DEGREES_DEFAULT,
            Self::END_DISTANCE_DEFAULT,
        )
    }
}

/// 路径元素（供渲染端使用）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    MoveTo(Point2),
    LineTo(Point2),
}

/// 将线段序列展开为 MoveTo/LineTo 对
pub fn path_elements(segments: &[LineSegment]) -> Vec<PathElement> {
    segments
        .iter()
        .flat_map(|s| [PathElement::MoveTo(s.p1), PathElement::LineTo(s.p2)])
        .collect()
}

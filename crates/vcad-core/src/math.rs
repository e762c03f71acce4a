//! 数学基础类型
//!
//! 基于 nalgebra 的向量和点类型别名，以及坐标轴交换、平面旋转和投影等
//! 向量工具函数。

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// 2D点类型
pub type Point2 = na::Point2<f64>;

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 2D向量类型
pub type Vector2 = na::Vector2<f64>;

/// 3D向量类型
pub type Vector3 = na::Vector3<f64>;

/// 2D齐次变换矩阵
pub type Matrix3 = na::Matrix3<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个2D点是否近似相等
#[inline]
pub fn points_approx_eq(a: &Point2, b: &Point2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// 由两条正交坐标轴构成的平面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthogonalAxes {
    XY,
    XZ,
    YZ,
}

impl OrthogonalAxes {
    /// 平面的两条轴（第一轴，第二轴）
    pub fn axes(&self) -> (Axis, Axis) {
        match self {
            OrthogonalAxes::XY => (Axis::X, Axis::Y),
            OrthogonalAxes::XZ => (Axis::X, Axis::Z),
            OrthogonalAxes::YZ => (Axis::Y, Axis::Z),
        }
    }
}

#[inline]
fn component(v: &Vector3, axis: Axis) -> f64 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

#[inline]
fn component_mut(v: &mut Vector3, axis: Axis) -> &mut f64 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
        Axis::Z => &mut v.z,
    }
}

/// 对向量的某一分量取反
pub fn negate_axis(v: &Vector3, axis: Axis) -> Vector3 {
    let mut out = *v;
    let c = component_mut(&mut out, axis);
    *c = -*c;
    out
}

/// 交换向量在指定平面上的两个分量
pub fn exchange_coordinates(v: &Vector3, plane: OrthogonalAxes) -> Vector3 {
    let (a, b) = plane.axes();
    let mut out = *v;
    *component_mut(&mut out, a) = component(v, b);
    *component_mut(&mut out, b) = component(v, a);
    out
}

/// 在指定平面内旋转向量（弧度，逆时针），平面外分量保持不变
pub fn rotate_in_plane(v: &Vector3, plane: OrthogonalAxes, angle: f64) -> Vector3 {
    let (a, b) = plane.axes();
    let (sin, cos) = angle.sin_cos();
    let u = component(v, a);
    let w = component(v, b);
    let mut out = *v;
    *component_mut(&mut out, a) = u * cos - w * sin;
    *component_mut(&mut out, b) = u * sin + w * cos;
    out
}

/// 将3D向量投影到指定平面，得到平面内的2D向量
pub fn project_to_plane(v: &Vector3, plane: OrthogonalAxes) -> Vector2 {
    let (a, b) = plane.axes();
    Vector2::new(component(v, a), component(v, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_yz() {
        let v = exchange_coordinates(&Vector3::new(1.0, 2.0, 3.0), OrthogonalAxes::YZ);
        assert_eq!(v, Vector3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_negate_axis() {
        let v = negate_axis(&Vector3::new(1.0, 2.0, 3.0), Axis::Z);
        assert_eq!(v, Vector3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_rotate_in_plane_keeps_out_of_plane() {
        let v = rotate_in_plane(
            &Vector3::new(1.0, 0.0, 7.0),
            OrthogonalAxes::XY,
            std::f64::consts::FRAC_PI_2,
        );
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 1.0));
        assert!(approx_eq(v.z, 7.0));
    }

    #[test]
    fn test_project_to_plane() {
        let v = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(project_to_plane(&v, OrthogonalAxes::XY), Vector2::new(4.0, 5.0));
        assert_eq!(project_to_plane(&v, OrthogonalAxes::XZ), Vector2::new(4.0, 6.0));
    }
}

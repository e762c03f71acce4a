//! 2D仿射变换
//!
//! 元素坐标系到场馆坐标系的渲染变换、线性对象的旋转都基于此类型。

use crate::math::{Matrix3, Point2};
use serde::{Deserialize, Serialize};

/// 2D仿射变换（3x3齐次矩阵）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    matrix: Matrix3,
}

impl Transform2D {
    /// 创建平移变换
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                1.0, 0.0, dx,
                0.0, 1.0, dy,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 创建旋转变换（绕原点，弧度）
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: Matrix3::new(
                cos, -sin, 0.0,
                sin, cos, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 创建旋转变换（绕原点，角度）
    pub fn rotation_degrees(degrees: f64) -> Self {
        Self::rotation(degrees.to_radians())
    }

    /// 创建绕指定点的旋转变换（弧度）
    pub fn rotation_around(center: Point2, angle: f64) -> Self {
        Self::translation(center.x, center.y)
            .then(&Self::rotation(angle))
            .then(&Self::translation(-center.x, -center.y))
    }

    /// 创建缩放变换（绕原点）
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                sx, 0.0, 0.0,
                0.0, sy, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 相对于X轴的镜像（Y取反）
    pub fn mirror_x() -> Self {
        Self::scale(1.0, -1.0)
    }

    /// 组合两个变换（self 在后，other 在前）
    ///
    /// `a.then(&b)` 作用于点时先应用 `b` 再应用 `a`，
    /// 与追加式（append）矩阵构造的顺序一致。
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// 变换一个点
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        let v = self.matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// 获取逆变换
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|m| Self { matrix: m })
    }

    /// 齐次矩阵（供渲染端使用）
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// 线性部分行列式为负时，变换包含镜像
    pub fn is_mirrored(&self) -> bool {
        let det = self.matrix[(0, 0)] * self.matrix[(1, 1)]
            - self.matrix[(0, 1)] * self.matrix[(1, 0)];
        det < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_translation() {
        let t = Transform2D::translation(10.0, 20.0);
        let result = t.transform_point(&Point2::new(5.0, 5.0));

        assert!(approx_eq(result.x, 15.0));
        assert!(approx_eq(result.y, 25.0));
    }

    #[test]
    fn test_rotation_degrees() {
        let t = Transform2D::rotation_degrees(90.0);
        let result = t.transform_point(&Point2::new(1.0, 0.0));

        assert!(approx_eq(result.x, 0.0));
        assert!(approx_eq(result.y, 1.0));
    }

    #[test]
    fn test_rotation_around() {
        let t = Transform2D::rotation_around(Point2::new(1.0, 1.0), std::f64::consts::PI);
        let result = t.transform_point(&Point2::new(2.0, 1.0));

        assert!(approx_eq(result.x, 0.0));
        assert!(approx_eq(result.y, 1.0));
    }

    #[test]
    fn test_composition_order() {
        // 先镜像、再旋转、最后平移
        let t = Transform2D::translation(3.0, 4.0)
            .then(&Transform2D::rotation_degrees(90.0))
            .then(&Transform2D::mirror_x());
        let result = t.transform_point(&Point2::new(0.0, 1.0));

        // (0,1) -> (0,-1) -> (1,0) -> (4,4)
        assert!(approx_eq(result.x, 4.0));
        assert!(approx_eq(result.y, 4.0));
        assert!(t.is_mirrored());
    }

    #[test]
    fn test_inverse() {
        let t = Transform2D::translation(10.0, 20.0)
            .then(&Transform2D::rotation(0.5))
            .then(&Transform2D::scale(2.0, 3.0));

        let inv = t.inverse().unwrap();
        let p = Point2::new(100.0, 200.0);
        let restored = inv.transform_point(&t.transform_point(&p));

        assert!((restored.x - p.x).abs() < 1e-9);
        assert!((restored.y - p.y).abs() < 1e-9);
    }
}

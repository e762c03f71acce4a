//! 质量属性与质心标记
//!
//! 质量属性的计算不在本库范围内，只通过 [`MassProperties`] 能力接口读取。

use crate::line::LineSegment;
use crate::math::{Point2, Vector3};
use serde::{Deserialize, Serialize};

/// 质心十字标记的默认总长（米）
pub const COG_MARKER_SIZE_DEFAULT: f64 = 0.15;

/// 质量属性能力
pub trait MassProperties {
    /// 对象坐标系下的质心
    fn cog_in_object_coordinates(&self) -> Vector3;

    fn weight_kg(&self) -> f64;

    fn is_cog_valid(&self) -> bool;
}

/// 单点质量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    pub cog: Vector3,
    pub weight_kg: f64,
    pub cog_valid: bool,
}

impl PointMass {
    pub fn new(cog: Vector3, weight_kg: f64) -> Self {
        Self {
            cog,
            weight_kg,
            cog_valid: true,
        }
    }
}

impl Default for PointMass {
    fn default() -> Self {
        Self {
            cog: Vector3::zeros(),
            weight_kg: 0.0,
            cog_valid: false,
        }
    }
}

impl MassProperties for PointMass {
    fn cog_in_object_coordinates(&self) -> Vector3 {
        self.cog
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn is_cog_valid(&self) -> bool {
        self.cog_valid
    }
}

/// 以中心点生成十字标记（水平线在前）
pub fn crosshair_segments(center: &Point2, size: f64) -> [LineSegment; 2] {
    let half = 0.5 * size;
    [
        LineSegment::from_coords(center.x - half, center.y, center.x + half, center.y),
        LineSegment::from_coords(center.x, center.y - half, center.x, center.y + half),
    ]
}

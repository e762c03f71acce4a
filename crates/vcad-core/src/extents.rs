//! 轴对齐矩形区域
//!
//! `Extents2D` 同时用作绘图界限容器和拖动约束边界。宽高不会被自动
//! 钳制为非负；尺寸是否合理由调用方根据 [`is_size_valid`] 决定。

use crate::math::Point2;
use serde::{Deserialize, Serialize};

/// 默认区域原点X（米）
pub const X_METERS_DEFAULT: f64 = 0.0;
/// 默认区域原点Y（米）
pub const Y_METERS_DEFAULT: f64 = 0.0;
/// 默认区域宽度（米）
pub const WIDTH_METERS_DEFAULT: f64 = 40.0;
/// 默认区域高度（米）
pub const HEIGHT_METERS_DEFAULT: f64 = 20.0;

/// 区域边长下限（米）
pub const SIZE_METERS_MINIMUM: f64 = 3.0;
/// 区域边长上限（米）
pub const SIZE_METERS_MAXIMUM: f64 = 1000.0;

/// 检查宽高是否落在推荐范围内
pub fn is_size_valid(width: f64, height: f64) -> bool {
    let range = SIZE_METERS_MINIMUM..=SIZE_METERS_MAXIMUM;
    range.contains(&width) && range.contains(&height)
}

/// 矩形区域（原点 + 宽高）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extents2D {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Extents2D {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 由两个角点创建（任意顺序）
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// 最小角点
    pub fn minimum_point(&self) -> Point2 {
        Point2::new(self.min_x(), self.min_y())
    }

    /// 最大角点
    pub fn maximum_point(&self) -> Point2 {
        Point2::new(self.max_x(), self.max_y())
    }

    /// 检查点是否在区域内（含边界）
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// 宽高均非负
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    pub fn set_extents(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }
}

impl Default for Extents2D {
    fn default() -> Self {
        Self::new(
            X_METERS_DEFAULT,
            Y_METERS_DEFAULT,
            WIDTH_METERS_DEFAULT,
            HEIGHT_METERS_DEFAULT,
        )
    }
}

/// 绘图界限
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingLimits {
    /// 是否随内容自动同步
    pub auto_sync: bool,
    pub extents: Extents2D,
}

impl DrawingLimits {
    pub const AUTO_SYNC_DEFAULT: bool = true;

    /// 图形导入时默认不自动同步
    pub const GRAPHICS_IMPORT_AUTO_SYNC_DEFAULT: bool = false;

    /// 无效界限标记
    pub const INVALID: Extents2D = Extents2D::new(0.0, 0.0, -1.0, -1.0);

    pub fn new(auto_sync: bool, extents: Extents2D) -> Self {
        Self { auto_sync, extents }
    }

    /// 图形导入使用的默认界限
    pub fn graphics_import() -> Self {
        Self::new(Self::GRAPHICS_IMPORT_AUTO_SYNC_DEFAULT, Extents2D::default())
    }

    /// 恢复默认值
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_invalid(&self) -> bool {
        self.extents == Self::INVALID
    }
}

impl Default for DrawingLimits {
    fn default() -> Self {
        Self::new(Self::AUTO_SYNC_DEFAULT, Extents2D::default())
    }
}

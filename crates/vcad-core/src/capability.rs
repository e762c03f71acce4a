//! 对象能力接口
//!
//! 每种图形对象按需实现以下能力，共享行为以默认方法提供：
//! - [`Labeled`]：具名集合成员
//! - [`Positionable`]：参考点
//! - [`Pickable`]：拾取、最近对象比较、框选
//! - [`Draggable`]：带边界检查的拖动
//! - [`Orientable`]：元素坐标系到场馆坐标系的变换
//! - [`MassBearing`]：质心合成

use crate::config::ModelContext;
use crate::error::ModelError;
use crate::extents::Extents2D;
use crate::frame::OrientationState;
use crate::line::LineSegment;
use crate::mass::{crosshair_segments, MassProperties};
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::transform::Transform2D;

/// 拾取直径占上下文短边的比例
pub const PICK_DIAMETER_RATIO: f64 = 0.015;

/// 由上下文尺寸求拾取半径
///
/// 半径与当前缩放无关，保持为可视区域短边的固定比例。
pub fn pick_radius(context: &Extents2D, diameter_ratio: f64) -> f64 {
    let shortest = context.width.min(context.height);
    0.5 * diameter_ratio * shortest
}

/// 具名集合成员
pub trait Labeled {
    fn label(&self) -> &str;

    fn set_label(&mut self, label: String);

    /// 候选名称为空时使用的默认名称
    fn default_label(&self) -> String;
}

/// 可定位对象
pub trait Positionable {
    /// 参考点（场馆坐标）
    fn reference_point(&self) -> Point2;

    fn set_reference_point(&mut self, point: Point2);
}

/// 可拾取对象
pub trait Pickable {
    /// 主线段，用于最近对象比较和框选
    fn primary_segment(&self) -> LineSegment;

    /// 参与拾取的全部线段
    fn pick_segments(&self) -> Vec<LineSegment> {
        vec![self.primary_segment()]
    }

    /// 按指定半径判断点是否命中任一线段
    fn contains_within(&self, point: &Point2, radius: f64) -> bool {
        self.pick_segments()
            .iter()
            .any(|s| s.distance_to_point(point) <= radius)
    }

    /// 判断点是否命中对象
    ///
    /// 半径为上下文短边的 1.5% 的一半。线性对象没有内部区域，
    /// `allow_tight_fit` 对它们不起作用。
    fn contains(&self, point: &Point2, context: &Extents2D, _allow_tight_fit: bool) -> bool {
        self.contains_within(point, pick_radius(context, PICK_DIAMETER_RATIO))
    }

    /// 到点击点的距离
    fn distance_to(&self, point: &Point2) -> f64 {
        self.primary_segment().distance_to_point(point)
    }

    /// 是否比 `other` 更接近点击点
    ///
    /// `other` 为空时为真；距离相等时为假，保留先遇到的候选。
    fn is_closer_than(&self, other: Option<&dyn Pickable>, point: &Point2) -> bool {
        match other {
            None => true,
            Some(other) => self.distance_to(point) < other.distance_to(point),
        }
    }

    /// 主线段是否与矩形相交
    fn intersects(&self, rect: &Extents2D) -> bool {
        self.primary_segment().intersects(rect)
    }
}

/// 可拖动对象
pub trait Draggable {
    /// 决定对象位置的全部点
    fn defining_points(&self) -> Vec<Point2>;

    /// 无条件平移
    fn drag(&mut self, dx: f64, dy: f64);

    /// 平移后所有定义点是否仍在边界内（纯判断，不修改对象）
    fn is_drag_target_within_bounds(&self, dx: f64, dy: f64, bounds: &Extents2D) -> bool {
        let delta = Vector2::new(dx, dy);
        self.defining_points()
            .iter()
            .all(|p| bounds.contains(&(*p + delta)))
    }

    /// 边界检查通过后才平移
    fn try_drag(&mut self, dx: f64, dy: f64, bounds: &Extents2D) -> Result<(), ModelError> {
        if !self.is_drag_target_within_bounds(dx, dy, bounds) {
            tracing::debug!("Drag by ({}, {}) rejected: target outside bounds", dx, dy);
            return Err(ModelError::DragOutOfBounds { dx, dy });
        }
        self.drag(dx, dy);
        Ok(())
    }
}

/// 具有朝向的实体
pub trait Orientable {
    fn orientation_state(&self) -> &OrientationState;

    fn orientation_state_mut(&mut self) -> &mut OrientationState;

    /// 元素坐标偏移转换到场馆坐标
    fn to_venue(&self, local_offset: &Vector3) -> Point3 {
        self.orientation_state().to_venue(local_offset)
    }

    /// 元素到场馆的渲染变换
    fn element_to_venue_transform(&self) -> Transform2D {
        self.orientation_state().element_to_venue_transform()
    }

    /// 场馆平面点（例如点击位置）映射回元素平面
    fn venue_to_element(&self, point: &Point2) -> Option<Point2> {
        self.orientation_state().venue_to_element(point)
    }
}

/// 携带质量属性的实体
pub trait MassBearing: Orientable {
    type Mass: MassProperties;

    fn mass_properties(&self) -> &Self::Mass;

    fn weight_kg(&self) -> f64 {
        self.mass_properties().weight_kg()
    }

    fn is_cog_valid(&self) -> bool {
        self.mass_properties().is_cog_valid()
    }

    /// 场馆坐标下的质心
    fn cog_in_venue_coordinates(&self) -> Point3 {
        self.to_venue(&self.mass_properties().cog_in_object_coordinates())
    }

    /// 质心在工作平面上的投影
    fn cog_in_planar_coordinates(&self) -> Point2 {
        self.cog_in_venue_coordinates().xy()
    }

    /// 质心十字标记
    fn cog_marker_segments(&self, size: f64) -> [LineSegment; 2] {
        crosshair_segments(&self.cog_in_planar_coordinates(), size)
    }

    /// 按上下文配置的尺寸生成质心标记
    fn cog_marker(&self, context: &ModelContext) -> [LineSegment; 2] {
        self.cog_marker_segments(context.config.cog_marker_size)
    }
}

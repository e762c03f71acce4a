//! 元素坐标系（ECS）与场馆坐标系之间的变换
//!
//! 实体的局部坐标系以几何中心（GC）为原点。离散偏移向量的变换顺序：
//!
//! 1. 倒置时先在原生3D局部坐标中对Z分量取反；
//! 2. 竖直朝向时交换Y/Z两轴（3D的"上"变为2D的竖直轴）；
//! 3. 在XY工作平面内按旋转角旋转；
//! 4. 加上场馆坐标下的GC。
//!
//! 渲染用的仿射矩阵则按"平移到GC → 旋转 → 倒置时Y轴缩放 -1"追加构造。
//! 两条路径各自独立，顺序不可互换。

use crate::math::{
    exchange_coordinates, negate_axis, project_to_plane, rotate_in_plane, Axis, OrthogonalAxes,
    Point2, Point3, Vector3,
};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// 实体朝向：决定3D局部偏移如何投影到2D工作平面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// 面向方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FacingDirection {
    Left,
    #[default]
    Right,
}

/// 实体的朝向状态
///
/// 旋转角与GC是变换的两个独立分量，修改其一不会改变另一个。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationState {
    orientation: Orientation,
    facing_direction: FacingDirection,
    inverted: bool,
    /// 工作平面内的旋转角（度）
    angle_degrees: f64,
    gc_in_venue: Point3,
}

impl OrientationState {
    pub const INVERTED_DEFAULT: bool = false;
    pub const ANGLE_DEGREES_DEFAULT: f64 = 0.0;

    pub fn new(
        orientation: Orientation,
        facing_direction: FacingDirection,
        inverted: bool,
        angle_degrees: f64,
        gc_in_venue: Point3,
    ) -> Self {
        Self {
            orientation,
            facing_direction,
            inverted,
            angle_degrees,
            gc_in_venue,
        }
    }

    /// 由平面参考点创建（GC的Z为0）
    ///
    /// 朝向在推导参考点之前就已确定。
    pub fn at_reference_point(
        orientation: Orientation,
        facing_direction: FacingDirection,
        inverted: bool,
        angle_degrees: f64,
        reference_point: Point2,
    ) -> Self {
        let mut state = Self::new(
            orientation,
            facing_direction,
            inverted,
            angle_degrees,
            Point3::origin(),
        );
        state.set_reference_point(reference_point);
        state
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn facing_direction(&self) -> FacingDirection {
        self.facing_direction
    }

    pub fn set_facing_direction(&mut self, facing_direction: FacingDirection) {
        self.facing_direction = facing_direction;
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// 旋转角（度）
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// 设置旋转角，GC 不变
    pub fn set_angle_degrees(&mut self, angle_degrees: f64) {
        self.angle_degrees = angle_degrees;
    }

    /// 场馆坐标下的GC
    pub fn gc_in_venue(&self) -> Point3 {
        self.gc_in_venue
    }

    /// 设置GC，平面参考点随之变为GC在XY平面上的投影
    pub fn set_gc_in_venue(&mut self, gc: Point3) {
        self.gc_in_venue = gc;
    }

    /// GC在XY工作平面上的投影
    pub fn gc_in_planar(&self) -> Point2 {
        self.reference_point()
    }

    /// 平面参考点
    pub fn reference_point(&self) -> Point2 {
        Point2::from(project_to_plane(&self.gc_in_venue.coords, OrthogonalAxes::XY))
    }

    /// 设置平面参考点，GC的Z分量归零
    pub fn set_reference_point(&mut self, point: Point2) {
        self.gc_in_venue = Point3::new(point.x, point.y, 0.0);
    }

    /// 局部偏移在投影后对象坐标中的表示（未加GC）
    pub fn to_projected_object(&self, local_offset: &Vector3) -> Vector3 {
        let mut v = if self.inverted {
            negate_axis(local_offset, Axis::Z)
        } else {
            *local_offset
        };

        match self.orientation {
            Orientation::Horizontal => {}
            Orientation::Vertical => {
                v = exchange_coordinates(&v, OrthogonalAxes::YZ);
            }
        }

        rotate_in_plane(&v, OrthogonalAxes::XY, self.angle_degrees.to_radians())
    }

    /// 局部偏移转换为场馆坐标
    pub fn to_venue(&self, local_offset: &Vector3) -> Point3 {
        self.gc_in_venue + self.to_projected_object(local_offset)
    }

    /// 局部偏移转换为场馆坐标并投影到工作平面
    pub fn to_venue_planar(&self, local_offset: &Vector3) -> Point2 {
        self.to_venue(local_offset).xy()
    }

    /// 元素到场馆的渲染变换：平移到GC，旋转，倒置时Y轴取反
    pub fn element_to_venue_transform(&self) -> Transform2D {
        let gc = self.gc_in_venue;
        let mut transform = Transform2D::translation(gc.x, gc.y)
            .then(&Transform2D::rotation_degrees(self.angle_degrees));
        if self.inverted {
            transform = transform.then(&Transform2D::mirror_x());
        }
        transform
    }

    /// 场馆平面点映射回元素平面（渲染变换的逆）
    pub fn venue_to_element(&self, point: &Point2) -> Option<Point2> {
        self.element_to_venue_transform()
            .inverse()
            .map(|inverse| inverse.transform_point(point))
    }
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::new(
            Orientation::default(),
            FacingDirection::default(),
            Self::INVERTED_DEFAULT,
            Self::ANGLE_DEGREES_DEFAULT,
            Point3::origin(),
        )
    }
}

//! VCAD 核心对象模型
//!
//! 提供线性对象、视觉辅助线、边界表面和实体的几何变换、拾取与拖动。
//!
//! # 架构设计
//!
//! 对象行为拆分为若干能力接口（见 [`capability`]）：
//! - `Positionable`: 参考点
//! - `Pickable`: 拾取、最近对象比较、框选
//! - `Draggable`: 带边界检查的拖动
//! - `Orientable`: 元素坐标系到场馆坐标系的变换
//! - `MassBearing`: 质心合成
//!
//! 线性对象通过 [`GraphicalObject`](model::GraphicalObject) 枚举统一分发，
//! 实体由 [`SolidBody`](solid::SolidBody) 表示。
//!
//! # 示例
//!
//! ```rust
//! use vcad_core::prelude::*;
//!
//! let mut objects = ObjectCollection::new();
//! let mut line = CartesianLine::default();
//! line.set_line_points(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
//! objects.insert(GraphicalObject::from(line));
//!
//! let view = Extents2D::new(0.0, 0.0, 40.0, 20.0);
//! let hit = objects.pick(&Point2::new(2.5, 2.5), &view, &ModelContext::default());
//! assert_eq!(hit, Some(0));
//! ```

pub mod capability;
pub mod cartesian;
pub mod collection;
pub mod config;
pub mod error;
pub mod extents;
pub mod frame;
pub mod layer;
pub mod line;
pub mod linear;
pub mod mass;
pub mod math;
pub mod model;
pub mod polar;
pub mod solid;
pub mod surface;
pub mod transform;
pub mod uniquefier;
pub mod visual_aid;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::capability::{
        Draggable, Labeled, MassBearing, Orientable, Pickable, Positionable, PICK_DIAMETER_RATIO,
    };
    pub use crate::cartesian::CartesianLine;
    pub use crate::collection::ObjectCollection;
    pub use crate::config::{ModelConfig, ModelContext};
    pub use crate::error::ModelError;
    pub use crate::extents::{DrawingLimits, Extents2D};
    pub use crate::frame::{FacingDirection, Orientation, OrientationState};
    pub use crate::layer::LayerId;
    pub use crate::line::{LineSegment, PathElement, PolarLineState};
    pub use crate::linear::LinearObject;
    pub use crate::mass::{MassProperties, PointMass};
    pub use crate::math::{Point2, Point3, Vector2, Vector3};
    pub use crate::model::GraphicalObject;
    pub use crate::polar::PolarLine;
    pub use crate::solid::SolidBody;
    pub use crate::surface::{Region2D, Surface, SurfaceMaterial};
    pub use crate::transform::Transform2D;
    pub use crate::uniquefier::{NumberFormat, PlainNumberFormat};
    pub use crate::visual_aid::{ArchitecturalVisualAid, MultilevelVisualAid};
}

//! 图形对象
//!
//! 支持的线性对象：
//! - 笛卡尔线段 (Line)
//! - 极坐标线段 (PolarLine)
//! - 边界表面 (Surface)
//! - 建筑视觉辅助线 (ArchitecturalVisualAid)
//! - 多层视觉辅助线 (MultilevelVisualAid)

use crate::capability::{Labeled, Positionable};
use crate::cartesian::CartesianLine;
use crate::line::LineSegment;
use crate::linear::{LinearAttributes, LinearObject};
use crate::math::Point2;
use crate::polar::PolarLine;
use crate::surface::Surface;
use crate::visual_aid::{ArchitecturalVisualAid, MultilevelVisualAid, VisualAidAttributes};
use serde::{Deserialize, Serialize};

/// 图形对象枚举
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphicalObject {
    Line(CartesianLine),
    PolarLine(PolarLine),
    Surface(Surface),
    ArchitecturalVisualAid(ArchitecturalVisualAid),
    MultilevelVisualAid(MultilevelVisualAid),
}

impl GraphicalObject {
    /// 获取对象的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            GraphicalObject::Line(_) => "Line",
            GraphicalObject::PolarLine(_) => "PolarLine",
            GraphicalObject::Surface(_) => "Surface",
            GraphicalObject::ArchitecturalVisualAid(_) => "ArchitecturalVisualAid",
            GraphicalObject::MultilevelVisualAid(_) => "MultilevelVisualAid",
        }
    }

    fn inner(&self) -> &dyn LinearObject {
        match self {
            GraphicalObject::Line(l) => l,
            GraphicalObject::PolarLine(p) => p,
            GraphicalObject::Surface(s) => s,
            GraphicalObject::ArchitecturalVisualAid(a) => a,
            GraphicalObject::MultilevelVisualAid(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LinearObject {
        match self {
            GraphicalObject::Line(l) => l,
            GraphicalObject::PolarLine(p) => p,
            GraphicalObject::Surface(s) => s,
            GraphicalObject::ArchitecturalVisualAid(a) => a,
            GraphicalObject::MultilevelVisualAid(m) => m,
        }
    }

    /// 视觉辅助线属性（非视觉辅助线为 `None`）
    pub fn visual_aid_attributes(&self) -> Option<&VisualAidAttributes> {
        match self {
            GraphicalObject::ArchitecturalVisualAid(a) => Some(&a.visual_aid),
            GraphicalObject::MultilevelVisualAid(m) => Some(&m.visual_aid),
            _ => None,
        }
    }

    pub fn visual_aid_attributes_mut(&mut self) -> Option<&mut VisualAidAttributes> {
        match self {
            GraphicalObject::ArchitecturalVisualAid(a) => Some(&mut a.visual_aid),
            GraphicalObject::MultilevelVisualAid(m) => Some(&mut m.visual_aid),
            _ => None,
        }
    }

    /// 是否用作听众平面
    pub fn is_listener_plane(&self) -> bool {
        self.visual_aid_attributes()
            .is_some_and(|v| v.use_as_listener_plane)
    }
}

impl Labeled for GraphicalObject {
    fn label(&self) -> &str {
        self.inner().label()
    }

    fn set_label(&mut self, label: String) {
        self.inner_mut().set_label(label);
    }

    fn default_label(&self) -> String {
        self.inner().default_label()
    }
}

impl Positionable for GraphicalObject {
    fn reference_point(&self) -> Point2 {
        self.inner().reference_point()
    }

    fn set_reference_point(&mut self, point: Point2) {
        self.inner_mut().set_reference_point(point);
    }
}

impl LinearObject for GraphicalObject {
    fn line(&self) -> LineSegment {
        self.inner().line()
    }

    fn set_line(&mut self, line: LineSegment) {
        self.inner_mut().set_line(line);
    }

    fn attributes(&self) -> &LinearAttributes {
        self.inner().attributes()
    }

    fn attributes_mut(&mut self) -> &mut LinearAttributes {
        self.inner_mut().attributes_mut()
    }

    fn angle_degrees(&self) -> f64 {
        self.inner().angle_degrees()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.inner_mut().translate(dx, dy);
    }
}

impl From<CartesianLine> for GraphicalObject {
    fn from(line: CartesianLine) -> Self {
        GraphicalObject::Line(line)
    }
}

impl From<PolarLine> for GraphicalObject {
    fn from(line: PolarLine) -> Self {
        GraphicalObject::PolarLine(line)
    }
}

impl From<Surface> for GraphicalObject {
    fn from(surface: Surface) -> Self {
        GraphicalObject::Surface(surface)
    }
}

impl From<ArchitecturalVisualAid> for GraphicalObject {
    fn from(aid: ArchitecturalVisualAid) -> Self {
        GraphicalObject::ArchitecturalVisualAid(aid)
    }
}

impl From<MultilevelVisualAid> for GraphicalObject {
    fn from(aid: MultilevelVisualAid) -> Self {
        GraphicalObject::MultilevelVisualAid(aid)
    }
}

//! 笛卡尔线段对象

use crate::capability::{Labeled, Positionable};
use crate::config::ModelContext;
use crate::layer::LayerId;
use crate::line::LineSegment;
use crate::linear::{LinearAttributes, LinearObject};
use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 由两个端点定义的线性对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianLine {
    segment: LineSegment,
    attributes: LinearAttributes,
}

impl CartesianLine {
    pub const LABEL_DEFAULT: &'static str = "Cartesian Line";

    pub fn new(segment: LineSegment, attributes: LinearAttributes) -> Self {
        Self {
            segment,
            attributes,
        }
    }

    /// 在上下文的默认图层上创建
    pub fn with_context(context: &ModelContext, segment: LineSegment) -> Self {
        Self::new(
            segment,
            LinearAttributes::new(Self::LABEL_DEFAULT, context.default_layer),
        )
    }

    pub fn set_line_points(&mut self, p1: Point2, p2: Point2) {
        self.segment = LineSegment::new(p1, p2);
    }

    /// 以起点、角度（度）和长度设置线段
    pub fn set_line_polar(&mut self, p1: Point2, angle_degrees: f64, distance: f64) {
        self.segment = LineSegment::from_polar(p1, angle_degrees, distance);
    }

    pub fn set_p1(&mut self, p1: Point2) {
        self.segment.p1 = p1;
    }

    pub fn set_p2(&mut self, p2: Point2) {
        self.segment.p2 = p2;
    }

    /// 线段长度
    pub fn distance(&self) -> f64 {
        self.segment.length()
    }
}

impl Default for CartesianLine {
    fn default() -> Self {
        Self::new(
            LineSegment::default(),
            LinearAttributes::new(Self::LABEL_DEFAULT, LayerId::DEFAULT),
        )
    }
}

impl Labeled for CartesianLine {
    fn label(&self) -> &str {
        &self.attributes.label
    }

    fn set_label(&mut self, label: String) {
        self.attributes.label = label;
    }

    fn default_label(&self) -> String {
        Self::LABEL_DEFAULT.to_string()
    }
}

impl Positionable for CartesianLine {
    fn reference_point(&self) -> Point2 {
        self.segment.p1
    }

    /// 平移整条线段，使起点落在给定点上
    fn set_reference_point(&mut self, point: Point2) {
        let delta: Vector2 = point - self.segment.p1;
        self.translate(delta.x, delta.y);
    }
}

impl LinearObject for CartesianLine {
    fn line(&self) -> LineSegment {
        self.segment
    }

    fn set_line(&mut self, line: LineSegment) {
        self.segment = line;
    }

    fn attributes(&self) -> &LinearAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut LinearAttributes {
        &mut self.attributes
    }

    fn angle_degrees(&self) -> f64 {
        self.segment.angle_degrees()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.segment = self.segment.translated(dx, dy);
    }
}

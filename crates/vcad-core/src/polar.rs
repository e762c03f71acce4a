//! 极坐标线段对象
//!
//! 以倾角仪位置为参考点，起点和终点各由角度和距离描述。设置笛卡尔
//! 端点时，两组极坐标相对当前参考点重新推导。

use crate::capability::{Labeled, Positionable};
use crate::config::ModelContext;
use crate::layer::LayerId;
use crate::line::{LineSegment, PolarLineState};
use crate::linear::{LinearAttributes, LinearObject};
use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    state: PolarLineState,
    attributes: LinearAttributes,
}

impl PolarLine {
    pub const LABEL_DEFAULT: &'static str = "Polar Line";

    pub fn new(state: PolarLineState, attributes: LinearAttributes) -> Self {
        Self { state, attributes }
    }

    pub fn with_context(context: &ModelContext, state: PolarLineState) -> Self {
        Self::new(
            state,
            LinearAttributes::new(Self::LABEL_DEFAULT, context.default_layer),
        )
    }

    pub fn state(&self) -> &PolarLineState {
        &self.state
    }

    pub fn set_state(&mut self, state: PolarLineState) {
        self.state = state;
    }

    /// 倾角仪位置
    pub fn origin(&self) -> Point2 {
        self.state.origin
    }

    pub fn set_origin(&mut self, origin: Point2) {
        self.state.origin = origin;
    }

    pub fn set_start(&mut self, angle_degrees: f64, distance: f64) {
        self.state.start_angle_degrees = angle_degrees;
        self.state.start_distance = distance;
    }

    pub fn set_end(&mut self, angle_degrees: f64, distance: f64) {
        self.state.end_angle_degrees = angle_degrees;
        self.state.end_distance = distance;
    }

    pub fn start_point(&self) -> Point2 {
        self.state.start_point()
    }

    pub fn end_point(&self) -> Point2 {
        self.state.end_point()
    }
}

impl Default for PolarLine {
    fn default() -> Self {
        Self::new(
            PolarLineState::default(),
            LinearAttributes::new(Self::LABEL_DEFAULT, LayerId::DEFAULT),
        )
    }
}

impl Labeled for PolarLine {
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

impl Positionable for PolarLine {
    fn reference_point(&self) -> Point2 {
        self.state.origin
    }

    fn set_reference_point(&mut self, point: Point2) {
        self.state.origin = point;
    }
}

impl LinearObject for PolarLine {
    fn line(&self) -> LineSegment {
        self.state.segment()
    }

    fn set_line(&mut self, line: LineSegment) {
        self.state.set_segment(&line);
    }

    fn attributes(&self) -> &LinearAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut LinearAttributes {
        &mut self.attributes
    }

    /// 终止角与起始角之差
    fn angle_degrees(&self) -> f64 {
        self.state.angle_degrees()
    }

    /// 平移参考点，极坐标保持不变
    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.origin += Vector2::new(dx, dy);
    }
}

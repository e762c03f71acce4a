//! 视觉辅助线
//!
//! 建筑视觉辅助线使用笛卡尔几何，多层视觉辅助线使用极坐标几何。
//! 两者都可以兼作投影器，也可以标记为听众平面。

use crate::capability::{Labeled, Positionable};
use crate::cartesian::CartesianLine;
use crate::config::ModelContext;
use crate::line::{LineSegment, PolarLineState};
use crate::linear::{LinearAttributes, LinearObject};
use crate::math::Point2;
use crate::polar::PolarLine;
use serde::{Deserialize, Serialize};

/// 视觉辅助线属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualAidAttributes {
    pub use_as_listener_plane: bool,
    pub number_of_target_zones: u32,
}

impl VisualAidAttributes {
    pub const USE_AS_LISTENER_PLANE_DEFAULT: bool = false;
    pub const NUMBER_OF_TARGET_ZONES_DEFAULT: u32 = 1;
}

impl Default for VisualAidAttributes {
    fn default() -> Self {
        Self {
            use_as_listener_plane: Self::USE_AS_LISTENER_PLANE_DEFAULT,
            number_of_target_zones: Self::NUMBER_OF_TARGET_ZONES_DEFAULT,
        }
    }
}

/// 建筑视觉辅助线（笛卡尔几何）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitecturalVisualAid {
    pub line: CartesianLine,
    pub visual_aid: VisualAidAttributes,
}

impl ArchitecturalVisualAid {
    pub const LABEL_DEFAULT: &'static str = "Architectural Visual Aid";

    pub fn with_context(context: &ModelContext, segment: LineSegment) -> Self {
        Self {
            line: CartesianLine::new(
                segment,
                LinearAttributes::new(Self::LABEL_DEFAULT, context.default_layer),
            ),
            visual_aid: VisualAidAttributes::default(),
        }
    }
}

impl Default for ArchitecturalVisualAid {
    fn default() -> Self {
        Self::with_context(&ModelContext::default(), LineSegment::default())
    }
}

/// 多层视觉辅助线（极坐标几何）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultilevelVisualAid {
    pub line: PolarLine,
    pub visual_aid: VisualAidAttributes,
}

impl MultilevelVisualAid {
    pub const LABEL_DEFAULT: &'static str = "Multilevel Visual Aid";

    pub fn with_context(context: &ModelContext, state: PolarLineState) -> Self {
        Self {
            line: PolarLine::new(
                state,
                LinearAttributes::new(Self::LABEL_DEFAULT, context.default_layer),
            ),
            visual_aid: VisualAidAttributes::default(),
        }
    }
}

impl Default for MultilevelVisualAid {
    fn default() -> Self {
        Self::with_context(&ModelContext::default(), PolarLineState::default())
    }
}

// 两种辅助线的能力实现都委托给内部线段，只有默认名称不同。
macro_rules! delegate_linear_object {
    ($ty:ty) => {
        impl Labeled for $ty {
            fn label(&self) -> &str {
                self.line.label()
            }

            fn set_label(&mut self, label: String) {
                self.line.set_label(label);
            }

            fn default_label(&self) -> String {
                Self::LABEL_DEFAULT.to_string()
            }
        }

        impl Positionable for $ty {
            fn reference_point(&self) -> Point2 {
                self.line.reference_point()
            }

            fn set_reference_point(&mut self, point: Point2) {
                self.line.set_reference_point(point);
            }
        }

        impl LinearObject for $ty {
            fn line(&self) -> LineSegment {
                self.line.line()
            }

            fn set_line(&mut self, line: LineSegment) {
                self.line.set_line(line);
            }

            fn attributes(&self) -> &LinearAttributes {
                self.line.attributes()
            }

            fn attributes_mut(&mut self) -> &mut LinearAttributes {
                self.line.attributes_mut()
            }

            fn angle_degrees(&self) -> f64 {
                self.line.angle_degrees()
            }

            fn translate(&mut self, dx: f64, dy: f64) {
                self.line.translate(dx, dy);
            }
        }
    };
}

delegate_linear_object!(ArchitecturalVisualAid);
delegate_linear_object!(MultilevelVisualAid);

//! 边界表面与区域
//!
//! [`Region2D`] 是一个矩形区域加上固定的四个表面，表面编号 1..=4，
//! 默认名称为 "Surface N"。表面材质只是标签，声学属性表不在本库范围内。

use crate::capability::{Labeled, Positionable};
use crate::cartesian::CartesianLine;
use crate::config::ModelContext;
use crate::error::ModelError;
use crate::extents::Extents2D;
use crate::line::LineSegment;
use crate::linear::{LinearAttributes, LinearObject};
use crate::math::Point2;
use crate::uniquefier::{resolve_unique_label, NumberFormat};
use serde::{Deserialize, Serialize};

/// 表面材质
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SurfaceMaterial {
    AcousticTileOnRigidSurface,
    BrickWallPainted,
    BrickWallUnpainted,
    CarpetHeavyOnConcrete,
    ConcreteBlockPainted,
    ConcreteBlockUnpainted,
    PlasterOnLath,
    PouredConcretePainted,
    PouredConcreteUnpainted,
    #[default]
    Rigid,
    VelourTouchingWall,
}

impl SurfaceMaterial {
    pub const ALL: [SurfaceMaterial; 11] = [
        SurfaceMaterial::AcousticTileOnRigidSurface,
        SurfaceMaterial::BrickWallPainted,
        SurfaceMaterial::BrickWallUnpainted,
        SurfaceMaterial::CarpetHeavyOnConcrete,
        SurfaceMaterial::ConcreteBlockPainted,
        SurfaceMaterial::ConcreteBlockUnpainted,
        SurfaceMaterial::PlasterOnLath,
        SurfaceMaterial::PouredConcretePainted,
        SurfaceMaterial::PouredConcreteUnpainted,
        SurfaceMaterial::Rigid,
        SurfaceMaterial::VelourTouchingWall,
    ];

    /// 稳定的缩写，用于外部表格查找
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SurfaceMaterial::AcousticTileOnRigidSurface => "AcousticTileOnRigidSurfKF",
            SurfaceMaterial::BrickWallPainted => "BrickWallPaintedLB",
            SurfaceMaterial::BrickWallUnpainted => "BrickWallUnpaintedLB",
            SurfaceMaterial::CarpetHeavyOnConcrete => "CarpetHeavyOnConcreteCH",
            SurfaceMaterial::ConcreteBlockPainted => "ConcreteBlockPaintedCH",
            SurfaceMaterial::ConcreteBlockUnpainted => "ConcreteBlockUnpaintedCH",
            SurfaceMaterial::PlasterOnLath => "PlasterOnLathCH",
            SurfaceMaterial::PouredConcretePainted => "PouredConcretePaintedLB",
            SurfaceMaterial::PouredConcreteUnpainted => "PouredConcreteUnpaintedLB",
            SurfaceMaterial::Rigid => "Rigid",
            SurfaceMaterial::VelourTouchingWall => "VelourTenOzPerYardSqrTouchingWallCH",
        }
    }

    /// 按缩写查找（区分大小写）
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.abbreviation() == abbreviation)
    }
}

/// 表面默认名称
pub fn default_surface_label(surface_number: usize) -> String {
    format!("Surface {}", surface_number)
}

/// 边界表面：带编号、旁路标记和材质的笛卡尔线段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub line: CartesianLine,
    /// 从 1 开始的编号
    pub surface_number: usize,
    pub bypassed: bool,
    pub material: SurfaceMaterial,
}

impl Surface {
    pub const SURFACE_NUMBER_DEFAULT: usize = 1;
    pub const BYPASSED_DEFAULT: bool = true;

    pub fn new(
        surface_number: usize,
        bypassed: bool,
        material: SurfaceMaterial,
        label: impl Into<String>,
    ) -> Self {
        let mut line = CartesianLine::default();
        line.set_label(label.into());
        Self {
            line,
            surface_number,
            bypassed,
            material,
        }
    }

    /// 指定编号、默认属性的表面
    pub fn numbered(surface_number: usize) -> Self {
        Self::new(
            surface_number,
            Self::BYPASSED_DEFAULT,
            SurfaceMaterial::default(),
            default_surface_label(surface_number),
        )
    }

    pub fn with_context(context: &ModelContext, surface_number: usize, segment: LineSegment) -> Self {
        let mut surface = Self::numbered(surface_number);
        surface.line = CartesianLine::new(
            segment,
            LinearAttributes::new(default_surface_label(surface_number), context.default_layer),
        );
        surface
    }

    /// 在集合中的序号（编号 - 1）；编号为 0 时没有对应序号
    pub fn ordinal(&self) -> Option<usize> {
        self.surface_number.checked_sub(1)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::numbered(Self::SURFACE_NUMBER_DEFAULT)
    }
}

impl Labeled for Surface {
    fn label(&self) -> &str {
        self.line.label()
    }

    fn set_label(&mut self, label: String) {
        self.line.set_label(label);
    }

    fn default_label(&self) -> String {
        default_surface_label(self.surface_number)
    }
}

impl Positionable for Surface {
    fn reference_point(&self) -> Point2 {
        self.line.reference_point()
    }

    fn set_reference_point(&mut self, point: Point2) {
        self.line.set_reference_point(point);
    }
}

impl LinearObject for Surface {
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

/// 求表面的唯一名称，排除序号为 `surface_number - 1` 的表面
pub fn unique_surface_label(
    surfaces: &[Surface],
    surface: &Surface,
    candidate: Option<&str>,
    format: &dyn NumberFormat,
) -> String {
    resolve_unique_label(
        surfaces,
        surface.ordinal(),
        candidate,
        &surface.default_label(),
        format,
    )
}

const NUMBER_OF_SURFACES: usize = 4;

/// 矩形区域与四个边界表面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region2D {
    pub extents: Extents2D,
    surfaces: [Surface; NUMBER_OF_SURFACES],
}

impl Region2D {
    pub const NUMBER_OF_SURFACES: usize = NUMBER_OF_SURFACES;

    pub fn new(extents: Extents2D) -> Self {
        Self {
            extents,
            surfaces: std::array::from_fn(|i| Surface::numbered(i + 1)),
        }
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn surface(&self, index: usize) -> Result<&Surface, ModelError> {
        self.surfaces
            .get(index)
            .ok_or(ModelError::InvalidSurfaceIndex(index))
    }

    /// 更新指定序号（0..4）的表面，编号保持不变
    pub fn set_surface(
        &mut self,
        index: usize,
        label: impl Into<String>,
        bypassed: bool,
        material: SurfaceMaterial,
    ) -> Result<(), ModelError> {
        let surface = self
            .surfaces
            .get_mut(index)
            .ok_or(ModelError::InvalidSurfaceIndex(index))?;
        surface.set_label(label.into());
        surface.bypassed = bypassed;
        surface.material = material;
        Ok(())
    }

    /// 按顺序从表面列表复制名称、旁路标记和材质
    pub fn set_surfaces(&mut self, surfaces: &[Surface]) -> Result<(), ModelError> {
        if surfaces.len() != Self::NUMBER_OF_SURFACES {
            return Err(ModelError::IndexOutOfRange {
                index: surfaces.len(),
                len: Self::NUMBER_OF_SURFACES,
            });
        }
        for (index, source) in surfaces.iter().enumerate() {
            self.set_surface(index, source.label(), source.bypassed, source.material)?;
        }
        Ok(())
    }

    /// 以唯一名称重命名表面，返回最终名称
    pub fn rename_surface(
        &mut self,
        index: usize,
        candidate: Option<&str>,
        format: &dyn NumberFormat,
    ) -> Result<String, ModelError> {
        let surface = self.surface(index)?;
        let label = unique_surface_label(&self.surfaces, surface, candidate, format);
        tracing::debug!("Renaming surface {} to '{}'", index + 1, label);
        self.surfaces[index].set_label(label.clone());
        Ok(label)
    }

    /// 恢复默认区域和表面属性，保留表面名称
    pub fn reset(&mut self) {
        self.extents = Extents2D::default();
        for surface in &mut self.surfaces {
            surface.bypassed = Surface::BYPASSED_DEFAULT;
            surface.material = SurfaceMaterial::default();
        }
    }
}

impl Default for Region2D {
    fn default() -> Self {
        Self::new(Extents2D::default())
    }
}

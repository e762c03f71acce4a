//! 模型配置与上下文
//!
//! 拾取容差、质心标记尺寸和绘图界限默认值可以从 TOML 加载，
//! 缺失的字段取默认值。[`ModelContext`] 把默认图层和配置显式
//! 传给需要它们的构造函数。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capability::{pick_radius, PICK_DIAMETER_RATIO};
use crate::extents::{DrawingLimits, Extents2D};
use crate::layer::LayerId;
use crate::mass::COG_MARKER_SIZE_DEFAULT;

/// 对象模型配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 拾取直径占上下文短边的比例
    #[serde(default = "ModelConfig::default_pick_diameter_ratio")]
    pub pick_diameter_ratio: f64,
    /// 质心十字标记总长（米）
    #[serde(default = "ModelConfig::default_cog_marker_size")]
    pub cog_marker_size: f64,
    #[serde(default)]
    pub drawing_limits: DrawingLimits,
}

impl ModelConfig {
    fn default_pick_diameter_ratio() -> f64 {
        PICK_DIAMETER_RATIO
    }

    fn default_cog_marker_size() -> f64 {
        COG_MARKER_SIZE_DEFAULT
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 从显式路径加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded model config from {}", path.display());
        Ok(config)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::Serialize)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            pick_diameter_ratio: Self::default_pick_diameter_ratio(),
            cog_marker_size: Self::default_cog_marker_size(),
            drawing_limits: DrawingLimits::default(),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 构造对象时显式传入的上下文
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelContext {
    /// 新对象使用的图层
    pub default_layer: LayerId,
    pub config: ModelConfig,
}

impl ModelContext {
    pub fn new(default_layer: LayerId, config: ModelConfig) -> Self {
        Self {
            default_layer,
            config,
        }
    }

    /// 按配置的比例计算拾取半径
    pub fn pick_radius(&self, view: &Extents2D) -> f64 {
        pick_radius(view, self.config.pick_diameter_ratio)
    }

    /// 拖动约束边界（配置的绘图界限）
    pub fn drag_bounds(&self) -> &Extents2D {
        &self.config.drawing_limits.extents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = ModelConfig::from_toml_str("cog_marker_size = 0.3\n").unwrap();
        assert_eq!(config.cog_marker_size, 0.3);
        assert_eq!(config.pick_diameter_ratio, PICK_DIAMETER_RATIO);
        assert_eq!(config.drawing_limits, DrawingLimits::default());
    }

    #[test]
    fn test_partial_drawing_limits() {
        let config = ModelConfig::from_toml_str(
            "[drawing_limits]\nauto_sync = false\n\n[drawing_limits.extents]\nwidth = 100.0\n",
        )
        .unwrap();
        assert!(!config.drawing_limits.auto_sync);
        assert_eq!(config.drawing_limits.extents.width, 100.0);
        assert_eq!(config.drawing_limits.extents.height, 20.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ModelConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ModelConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_context_pick_radius() {
        let context = ModelContext::default();
        let radius = context.pick_radius(&Extents2D::new(0.0, 0.0, 40.0, 20.0));
        assert!((radius - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_context_reads_configured_values() {
        let config = ModelConfig::from_toml_str(
            "pick_diameter_ratio = 0.1\n\n[drawing_limits.extents]\nwidth = 8.0\nheight = 4.0\n",
        )
        .unwrap();
        let context = ModelContext::new(LayerId::DEFAULT, config);

        assert!((context.pick_radius(&Extents2D::new(0.0, 0.0, 10.0, 10.0)) - 0.5).abs() < 1e-12);
        assert_eq!(context.drag_bounds(), &Extents2D::new(0.0, 0.0, 8.0, 4.0));
    }
}

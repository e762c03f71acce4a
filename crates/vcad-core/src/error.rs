//! 对象模型错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Drag by ({dx}, {dy}) would leave the bounds")]
    DragOutOfBounds { dx: f64, dy: f64 },

    #[error("Index {index} out of range for collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid surface index: {0}")]
    InvalidSurfaceIndex(usize),
}

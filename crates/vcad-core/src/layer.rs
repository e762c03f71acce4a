//! 图层标识
//!
//! 图层管理不在本库范围内。几何对象只携带一个不透明的图层标识，
//! 从不检查其内容。

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 图层ID生成器（0 保留给默认图层）
static LAYER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 不透明图层标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(u64);

impl LayerId {
    /// 默认图层
    pub const DEFAULT: LayerId = LayerId(0);

    /// 分配新的图层ID
    pub fn new() -> Self {
        Self(LAYER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// 从指定值创建（由外部图层管理器提供）
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! 唯一名称生成
//!
//! 在具名集合中为成员生成不冲突的标签：候选名称冲突时依次追加
//! `" (2)"`、`" (3)"` … 直到与其他成员都不重复。只计算字符串，
//! 不修改集合，赋值由调用方完成。

use crate::capability::Labeled;

/// 数字格式化器
pub trait NumberFormat {
    fn format(&self, number: u64) -> String;
}

/// 十进制纯数字格式
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNumberFormat;

impl NumberFormat for PlainNumberFormat {
    fn format(&self, number: u64) -> String {
        number.to_string()
    }
}

impl<F> NumberFormat for F
where
    F: Fn(u64) -> String,
{
    fn format(&self, number: u64) -> String {
        self(number)
    }
}

/// 计数器对应的后缀
///
/// 计数器为 0 时为空串（优先使用原候选名称）；计数器 `n > 0` 时渲染为
/// `" (n+1)"`，即第一个重名成员编号为 2。
pub fn uniquefier_appendix(counter: u64, format: &dyn NumberFormat) -> String {
    if counter == 0 {
        String::new()
    } else {
        format!(" ({})", format.format(counter + 1))
    }
}

/// 检查标签在集合中是否唯一（跳过 `exclude_index` 位置的成员）
pub fn is_label_unique<T: Labeled>(entries: &[T], exclude_index: Option<usize>, label: &str) -> bool {
    !entries
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude_index)
        .any(|(_, entry)| entry.label() == label)
}

/// 求唯一标签
///
/// 候选为空或仅含空白时使用 `default_label`。
pub fn resolve_unique_label<T: Labeled>(
    entries: &[T],
    exclude_index: Option<usize>,
    candidate: Option<&str>,
    default_label: &str,
    format: &dyn NumberFormat,
) -> String {
    let base = match candidate {
        Some(c) if !c.trim().is_empty() => c,
        _ => default_label,
    };

    let mut counter = 0u64;
    loop {
        let label = format!("{}{}", base, uniquefier_appendix(counter, format));
        if is_label_unique(entries, exclude_index, &label) {
            if counter > 0 {
                tracing::debug!("Label '{}' taken, resolved to '{}'", base, label);
            }
            return label;
        }
        counter += 1;
    }
}

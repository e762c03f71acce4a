//! 具名对象集合
//!
//! 保持插入顺序，插入和重命名时解析唯一标签，维护选择集，
//! 并提供拾取、框选和带边界检查的批量拖动。

use std::collections::BTreeSet;

use crate::capability::{Draggable, Labeled, Pickable};
use crate::config::ModelContext;
use crate::error::ModelError;
use crate::extents::Extents2D;
use crate::linear::LinearObject;
use crate::math::Point2;
use crate::model::GraphicalObject;
use crate::uniquefier::{resolve_unique_label, NumberFormat, PlainNumberFormat};

/// 有序的具名对象集合
#[derive(Debug, Clone)]
pub struct ObjectCollection<T> {
    objects: Vec<T>,
    selection: BTreeSet<usize>,
}

impl<T> Default for ObjectCollection<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            selection: BTreeSet::new(),
        }
    }
}

impl<T> ObjectCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.objects.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.objects
    }

    fn check_index(&self, index: usize) -> Result<(), ModelError> {
        if index < self.objects.len() {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfRange {
                index,
                len: self.objects.len(),
            })
        }
    }

    /// 移除对象，选择集中更大的索引前移
    pub fn remove(&mut self, index: usize) -> Result<T, ModelError> {
        self.check_index(index)?;
        let removed = self.objects.remove(index);
        self.selection = self
            .selection
            .iter()
            .filter(|&&i| i != index)
            .map(|&i| if i > index { i - 1 } else { i })
            .collect();
        Ok(removed)
    }

    // ========== 选择 ==========

    pub fn selection(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.iter().copied()
    }

    pub fn selected_objects(&self) -> impl Iterator<Item = &T> {
        self.selection.iter().filter_map(|&i| self.objects.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn select(&mut self, index: usize) -> Result<(), ModelError> {
        self.check_index(index)?;
        self.selection.insert(index);
        Ok(())
    }

    pub fn deselect(&mut self, index: usize) {
        self.selection.remove(&index);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        self.selection = (0..self.objects.len()).collect();
    }

    /// 把满足条件的全部对象加入选择集，已选对象保持选中
    pub fn select_where(&mut self, predicate: impl Fn(&T) -> bool) {
        let matches = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, object)| predicate(object))
            .map(|(i, _)| i);
        self.selection.extend(matches);
    }
}

impl<T: Labeled> ObjectCollection<T> {
    /// 插入对象，标签按唯一规则解析，返回索引
    pub fn insert(&mut self, object: T) -> usize {
        self.insert_with_format(object, &PlainNumberFormat)
    }

    pub fn insert_with_format(&mut self, mut object: T, format: &dyn NumberFormat) -> usize {
        let label = resolve_unique_label(
            &self.objects,
            None,
            Some(object.label()),
            &object.default_label(),
            format,
        );
        object.set_label(label);
        tracing::debug!("Inserted '{}' at {}", object.label(), self.objects.len());
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// 重命名对象，返回最终标签
    pub fn rename(
        &mut self,
        index: usize,
        candidate: Option<&str>,
        format: &dyn NumberFormat,
    ) -> Result<String, ModelError> {
        self.check_index(index)?;
        let default_label = self.objects[index].default_label();
        let label = resolve_unique_label(
            &self.objects,
            Some(index),
            candidate,
            &default_label,
            format,
        );
        tracing::debug!("Renamed object {} to '{}'", index, label);
        self.objects[index].set_label(label.clone());
        Ok(label)
    }

    /// 按标签查找
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.label() == label)
    }
}

impl<T: Pickable> ObjectCollection<T> {
    /// 拾取点击点下最近的对象
    ///
    /// 按集合顺序遍历，只有严格更近的候选才会替换当前结果，
    /// 距离相同时保留先遇到的对象。
    /// 拾取半径取自上下文配置的比例和当前可视区域。
    pub fn pick(&self, point: &Point2, view: &Extents2D, context: &ModelContext) -> Option<usize> {
        let radius = context.pick_radius(view);
        let mut nearest: Option<usize> = None;
        for (index, object) in self.objects.iter().enumerate() {
            if !object.contains_within(point, radius) {
                continue;
            }
            let current = nearest.map(|i| &self.objects[i] as &dyn Pickable);
            if object.is_closer_than(current, point) {
                nearest = Some(index);
            }
        }
        nearest
    }

    /// 框选：选中主线段与矩形相交的全部对象
    pub fn select_in_region(&mut self, rect: &Extents2D, extend: bool) -> usize {
        if !extend {
            self.selection.clear();
        }
        let hits: Vec<usize> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.intersects(rect))
            .map(|(i, _)| i)
            .collect();
        tracing::trace!("Region selection hit {} objects", hits.len());
        self.selection.extend(hits.iter().copied());
        hits.len()
    }
}

impl<T: Draggable> ObjectCollection<T> {
    /// 选择集整体是否可以按增量拖动
    pub fn is_selection_drag_within_bounds(&self, dx: f64, dy: f64, bounds: &Extents2D) -> bool {
        self.selected_objects()
            .all(|object| object.is_drag_target_within_bounds(dx, dy, bounds))
    }

    /// 拖动整个选择集；任一对象越界则全部不动
    pub fn drag_selection(&mut self, dx: f64, dy: f64, bounds: &Extents2D) -> Result<(), ModelError> {
        if !self.is_selection_drag_within_bounds(dx, dy, bounds) {
            tracing::debug!("Selection drag by ({}, {}) rejected", dx, dy);
            return Err(ModelError::DragOutOfBounds { dx, dy });
        }
        for &index in &self.selection {
            if let Some(object) = self.objects.get_mut(index) {
                object.drag(dx, dy);
            }
        }
        Ok(())
    }

    /// 以上下文配置的绘图界限为边界拖动选择集
    pub fn drag_selection_within_limits(
        &mut self,
        dx: f64,
        dy: f64,
        context: &ModelContext,
    ) -> Result<(), ModelError> {
        let bounds = *context.drag_bounds();
        self.drag_selection(dx, dy, &bounds)
    }
}

impl ObjectCollection<GraphicalObject> {
    /// 把全部投影器加入选择集
    pub fn select_projectors(&mut self) {
        self.select_where(|o| o.use_as_projector());
    }

    /// 把全部听众平面加入选择集
    pub fn select_listener_planes(&mut self) {
        self.select_where(GraphicalObject::is_listener_plane);
    }

    /// 选择集中的投影器
    pub fn selected_projectors(&self) -> impl Iterator<Item = &GraphicalObject> {
        self.selected_objects().filter(|o| o.use_as_projector())
    }

    /// 选择集中的听众平面
    pub fn selected_listener_planes(&self) -> impl Iterator<Item = &GraphicalObject> {
        self.selected_objects().filter(|o| o.is_listener_plane())
    }
}

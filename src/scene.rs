//! Scene registry: owns every live shape and the stacking-order extremes.
//!
//! Insertion order is irrelevant — only `z_index` determines paint and pick
//! order. The registry is the sole authority for shape existence; the engine
//! layer adds event emission around these primitives. Z-order extremes are
//! centralized here so shapes request "bring to front"/"send to back"
//! through the scene instead of mutating shared counters.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use crate::shape::{Shape, ShapeId};
use crate::vector::Vector;

/// In-memory registry of shapes keyed by id.
///
/// `max_z_index` / `min_z_index` widen whenever a shape is inserted or
/// raised/lowered past the current bound; they are never narrowed by
/// removal. This keeps "front" and "back" monotone across the scene's
/// lifetime even after the extreme shape is destroyed.
pub struct Scene {
    shapes: HashMap<ShapeId, Shape>,
    max_z_index: i64,
    min_z_index: i64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: HashMap::new(), max_z_index: 0, min_z_index: 0 }
    }

    /// Insert or replace a shape, widening the z extremes. A shape with an
    /// existing id overwrites the previous entry (rehydration semantics).
    pub fn insert(&mut self, shape: Shape) {
        self.widen(shape.z_index);
        self.shapes.insert(shape.id, shape);
    }

    /// Remove a shape by id, returning it if present. Extremes are left
    /// untouched.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Number of shapes currently registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the registry holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn max_z_index(&self) -> i64 {
        self.max_z_index
    }

    #[must_use]
    pub fn min_z_index(&self) -> i64 {
        self.min_z_index
    }

    /// Mutable iteration over every shape, used by the pan paths that
    /// translate the whole scene.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.values_mut()
    }

    /// Shapes sorted ascending by `(z_index, id)` — paint order, lowest
    /// first so higher z ends up visually on top.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        shapes
    }

    /// Shapes sorted descending by `z_index` (ties by id, stable) — pick
    /// order, topmost first. The deliberate inverse of paint order.
    #[must_use]
    pub fn pick_order(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| b.z_index.cmp(&a.z_index).then_with(|| a.id.cmp(&b.id)));
        shapes
    }

    /// The topmost visible shape containing `world`, if any.
    #[must_use]
    pub fn pick(&self, world: Vector) -> Option<ShapeId> {
        self.pick_order()
            .into_iter()
            .find(|shape| shape.visible && shape.contains(world))
            .map(|shape| shape.id)
    }

    /// Raise a shape one step; widens `max_z_index` when it climbs past it.
    /// Returns `false` for an unknown id.
    pub fn raise(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.shapes.get_mut(id) else {
            return false;
        };
        shape.z_index += 1;
        let z = shape.z_index;
        self.widen(z);
        true
    }

    /// Lower a shape one step; widens `min_z_index` when it sinks past it.
    pub fn lower(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.shapes.get_mut(id) else {
            return false;
        };
        shape.z_index -= 1;
        let z = shape.z_index;
        self.widen(z);
        true
    }

    /// Assign the shape `max_z_index + 1`, widening the maximum.
    pub fn bring_to_front(&mut self, id: &ShapeId) -> bool {
        if !self.shapes.contains_key(id) {
            return false;
        }
        self.max_z_index += 1;
        let z = self.max_z_index;
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.z_index = z;
        }
        true
    }

    /// Assign the shape `min_z_index - 1`, widening the minimum.
    pub fn send_to_back(&mut self, id: &ShapeId) -> bool {
        if !self.shapes.contains_key(id) {
            return false;
        }
        self.min_z_index -= 1;
        let z = self.min_z_index;
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.z_index = z;
        }
        true
    }

    fn widen(&mut self, z: i64) {
        if z > self.max_z_index {
            self.max_z_index = z;
        }
        if z < self.min_z_index {
            self.min_z_index = z;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

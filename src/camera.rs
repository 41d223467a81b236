#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::vector::Vector;

/// Viewport state for pan/zoom on the infinite canvas.
///
/// `origin` is the screen-space offset of the world origin in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom) and stays strictly positive.
/// Screen points passed to the conversions are relative to the surface's
/// top-left corner; the engine subtracts the surface offset first.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vector,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { origin: Vector::ZERO, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a surface-relative screen point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vector) -> Vector {
        screen.sub(self.origin).scale(1.0 / self.zoom)
    }

    /// Convert a world-space point to surface-relative screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Vector) -> Vector {
        world.scale(self.zoom).add(self.origin)
    }

    /// Step the zoom to `next_zoom` while keeping the world point under
    /// `cursor` (surface-relative) at the same screen position.
    ///
    /// The anchor correction follows from the transform definition: after
    /// changing the scale, the world point under the cursor has shifted by
    /// `world_after - world_before`, so the origin absorbs that shift scaled
    /// back into screen units.
    pub fn zoom_at(&mut self, cursor: Vector, next_zoom: f64) {
        let world_before = self.screen_to_world(cursor);
        self.zoom = next_zoom;
        let world_after = self.screen_to_world(cursor);
        self.origin = self.origin.add(world_after.sub(world_before).scale(self.zoom));
    }
}

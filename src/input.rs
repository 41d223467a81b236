//! Input model: pointer buttons, modifier keys, wheel deltas, and the
//! gesture state machine.
//!
//! The engine consumes these types from the host event layer. `InputState`
//! is the active gesture tracked between pointer-down and pointer-up; each
//! variant carries the world-space reference point needed to compute
//! incremental deltas on the next move event.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::shape::ShapeId;
use crate::vector::Vector;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Shift key is held.
    pub shift: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click) — the designated pan button.
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes (back/forward
    /// buttons) fold into `Primary` so they never trigger panning.
    #[must_use]
    pub fn from_code(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key as reported by the host (e.g. `"Control"`, `"z"`,
/// `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Wheel / trackpad scroll delta in screen pixels (positive `dy` = down).
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// The active gesture. Transitions:
///
/// - `Idle -> Dragging` when pointer-down picks a shape.
/// - `Idle -> Panning` when pointer-down with the pan button hits nothing
///   and panning is enabled.
/// - Any state `-> Idle` on pointer-up, unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape follows the pointer; `last_world` is the reference point for
    /// the next incremental delta.
    Dragging { id: ShapeId, last_world: Vector },
    /// Every shape follows the pointer, which is indistinguishable from
    /// moving the viewport without touching zoom or origin.
    Panning { last_world: Vector },
}

impl InputState {
    /// The shape currently being dragged, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<ShapeId> {
        match self {
            Self::Dragging { id, .. } => Some(*id),
            _ => None,
        }
    }
}

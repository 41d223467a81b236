//! Typed publish/subscribe with named channels.
//!
//! Two bus instances live on the engine: the scene bus (pointer events,
//! `create`, and one dynamic channel per configured command) and the shape
//! bus, keyed by `(ShapeId, channel)` so per-shape subscriptions tear down
//! with the shape. Dispatch is synchronous and single-threaded; listeners
//! capture whatever external state they need.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::collections::HashMap;
use std::hash::Hash;

use crate::shape::{RawShape, ShapeId};
use crate::vector::Vector;

/// Handle returned by [`EventBus::on`], used to unsubscribe.
pub type ListenerId = u64;

/// Scene-level channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SceneChannel {
    Click,
    MouseMove,
    MouseDown,
    MouseUp,
    Create,
    /// One channel per configured semantic command name ("undo", "copy", …).
    Command(String),
}

/// Shape-level channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeChannel {
    Click,
    DragStart,
    DragEnd,
    Drag,
    Destroy,
}

impl ShapeChannel {
    pub const ALL: [Self; 5] =
        [Self::Click, Self::DragStart, Self::DragEnd, Self::Drag, Self::Destroy];
}

/// Pointer position in both coordinate spaces at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerArgs {
    pub absolute: Vector,
    pub world: Vector,
}

/// What a scene-level pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Scene,
    Shape(ShapeId),
}

/// Payload delivered on scene channels.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Pointer-carrying events: `click`, `mousemove`, `mousedown`, `mouseup`.
    Pointer { pointer: PointerArgs, target: EventTarget },
    /// A shape was created or rehydrated; carries its full snapshot.
    Created { shape: RawShape },
    /// A configured command fired. Commands carry no payload.
    Command,
}

/// Payload delivered on shape channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeEvent {
    pub pointer: PointerArgs,
    pub target: ShapeId,
}

struct Listener<A> {
    id: ListenerId,
    callback: Box<dyn FnMut(&A)>,
}

/// A typed event bus: listeners registered per channel, dispatched in
/// subscription order.
pub struct EventBus<C, A> {
    listeners: HashMap<C, Vec<Listener<A>>>,
    next_id: ListenerId,
}

impl<C: Eq + Hash, A> EventBus<C, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { listeners: HashMap::new(), next_id: 1 }
    }

    /// Subscribe to a channel. The returned id unsubscribes via
    /// [`EventBus::off`].
    pub fn on<F>(&mut self, channel: C, callback: F) -> ListenerId
    where
        F: FnMut(&A) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners
            .entry(channel)
            .or_default()
            .push(Listener { id, callback: Box::new(callback) });
        id
    }

    /// Remove one listener. Returns `false` when the id was not subscribed
    /// on that channel.
    pub fn off(&mut self, channel: &C, id: ListenerId) -> bool {
        let Some(listeners) = self.listeners.get_mut(channel) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        listeners.len() < before
    }

    /// Deliver `args` to every listener on `channel`, in subscription order.
    /// Returns the number of listeners invoked.
    pub fn emit(&mut self, channel: &C, args: &A) -> usize {
        let Some(listeners) = self.listeners.get_mut(channel) else {
            return 0;
        };
        for listener in listeners.iter_mut() {
            (listener.callback)(args);
        }
        listeners.len()
    }

    /// Drop every listener on a channel.
    pub fn clear_channel(&mut self, channel: &C) {
        self.listeners.remove(channel);
    }

    /// Number of listeners currently subscribed to a channel.
    #[must_use]
    pub fn listener_count(&self, channel: &C) -> usize {
        self.listeners.get(channel).map_or(0, Vec::len)
    }
}

impl<C: Eq + Hash, A> Default for EventBus<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

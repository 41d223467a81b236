#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type CountBus = EventBus<SceneChannel, SceneEvent>;

fn pointer_event() -> SceneEvent {
    SceneEvent::Pointer {
        pointer: PointerArgs { absolute: Vector::new(1.0, 2.0), world: Vector::new(3.0, 4.0) },
        target: EventTarget::Scene,
    }
}

fn counter() -> (Rc<RefCell<u32>>, impl FnMut(&SceneEvent)) {
    let count = Rc::new(RefCell::new(0));
    let inner = Rc::clone(&count);
    (count, move |_| *inner.borrow_mut() += 1)
}

// --- Subscribe / emit ---

#[test]
fn emit_without_listeners_delivers_nothing() {
    let mut bus = CountBus::new();
    assert_eq!(bus.emit(&SceneChannel::Click, &pointer_event()), 0);
}

#[test]
fn emit_invokes_subscribed_listener() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    bus.on(SceneChannel::Click, cb);
    bus.emit(&SceneChannel::Click, &pointer_event());
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn emit_invokes_all_listeners_on_channel() {
    let mut bus = CountBus::new();
    let (count_a, cb_a) = counter();
    let (count_b, cb_b) = counter();
    bus.on(SceneChannel::Click, cb_a);
    bus.on(SceneChannel::Click, cb_b);
    assert_eq!(bus.emit(&SceneChannel::Click, &pointer_event()), 2);
    assert_eq!(*count_a.borrow(), 1);
    assert_eq!(*count_b.borrow(), 1);
}

#[test]
fn channels_are_isolated() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    bus.on(SceneChannel::Click, cb);
    bus.emit(&SceneChannel::MouseMove, &pointer_event());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn command_channels_are_distinct_by_name() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    bus.on(SceneChannel::Command("undo".to_owned()), cb);
    bus.emit(&SceneChannel::Command("redo".to_owned()), &SceneEvent::Command);
    assert_eq!(*count.borrow(), 0);
    bus.emit(&SceneChannel::Command("undo".to_owned()), &SceneEvent::Command);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn listener_receives_payload() {
    let mut bus = CountBus::new();
    let seen = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&seen);
    bus.on(SceneChannel::MouseDown, move |args: &SceneEvent| {
        *inner.borrow_mut() = Some(args.clone());
    });
    bus.emit(&SceneChannel::MouseDown, &pointer_event());
    let got = seen.borrow().clone();
    match got {
        Some(SceneEvent::Pointer { pointer, target }) => {
            assert_eq!(pointer.absolute, Vector::new(1.0, 2.0));
            assert_eq!(pointer.world, Vector::new(3.0, 4.0));
            assert_eq!(target, EventTarget::Scene);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

// --- Unsubscribe ---

#[test]
fn off_removes_listener() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    let id = bus.on(SceneChannel::Click, cb);
    assert!(bus.off(&SceneChannel::Click, id));
    bus.emit(&SceneChannel::Click, &pointer_event());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn off_unknown_id_returns_false() {
    let mut bus = CountBus::new();
    assert!(!bus.off(&SceneChannel::Click, 42));
}

#[test]
fn off_leaves_other_listeners() {
    let mut bus = CountBus::new();
    let (count_a, cb_a) = counter();
    let (count_b, cb_b) = counter();
    let id_a = bus.on(SceneChannel::Click, cb_a);
    bus.on(SceneChannel::Click, cb_b);
    bus.off(&SceneChannel::Click, id_a);
    bus.emit(&SceneChannel::Click, &pointer_event());
    assert_eq!(*count_a.borrow(), 0);
    assert_eq!(*count_b.borrow(), 1);
}

#[test]
fn listener_ids_are_unique_across_channels() {
    let mut bus = CountBus::new();
    let (_, cb_a) = counter();
    let (_, cb_b) = counter();
    let id_a = bus.on(SceneChannel::Click, cb_a);
    let id_b = bus.on(SceneChannel::MouseUp, cb_b);
    assert_ne!(id_a, id_b);
}

#[test]
fn clear_channel_drops_all_listeners() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    bus.on(SceneChannel::Create, cb);
    bus.clear_channel(&SceneChannel::Create);
    assert_eq!(bus.listener_count(&SceneChannel::Create), 0);
    bus.emit(&SceneChannel::Create, &SceneEvent::Command);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn listener_count_tracks_subscriptions() {
    let mut bus = CountBus::new();
    assert_eq!(bus.listener_count(&SceneChannel::Click), 0);
    let (_, cb) = counter();
    bus.on(SceneChannel::Click, cb);
    assert_eq!(bus.listener_count(&SceneChannel::Click), 1);
}

// --- Shape bus keying ---

#[test]
fn shape_bus_keys_by_shape_and_channel() {
    let mut bus: EventBus<(ShapeId, ShapeChannel), ShapeEvent> = EventBus::new();
    let shape_a = ShapeId::new_v4();
    let shape_b = ShapeId::new_v4();
    let (count, cb) = {
        let count = Rc::new(RefCell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_: &ShapeEvent| *inner.borrow_mut() += 1)
    };
    bus.on((shape_a, ShapeChannel::Click), cb);

    let event = ShapeEvent {
        pointer: PointerArgs { absolute: Vector::ZERO, world: Vector::ZERO },
        target: shape_b,
    };
    bus.emit(&(shape_b, ShapeChannel::Click), &event);
    assert_eq!(*count.borrow(), 0);
    bus.emit(&(shape_a, ShapeChannel::Drag), &event);
    assert_eq!(*count.borrow(), 0);
    bus.emit(&(shape_a, ShapeChannel::Click), &event);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn stateful_listener_accumulates() {
    let mut bus = CountBus::new();
    let (count, cb) = counter();
    bus.on(SceneChannel::MouseMove, cb);
    for _ in 0..5 {
        bus.emit(&SceneChannel::MouseMove, &pointer_event());
    }
    assert_eq!(*count.borrow(), 5);
}

//! Top-level engine: input routing, the shape factory, lifecycle, and the
//! browser shell.
//!
//! All logic lives in [`EngineCore`], which has no host dependencies and is
//! exercised directly by the test suite. [`Engine`] wraps a core together
//! with the canvas element and 2D context, wires window-level DOM listeners
//! with a lifetime tied 1:1 to the engine, and drives the repaint loop off
//! `requestAnimationFrame`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use log::{debug, warn};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent,
    MouseEvent, WheelEvent,
};

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::consts::TRACKPAD_DELTA_MAX;
use crate::error::EngineError;
use crate::events::{
    EventBus, EventTarget, ListenerId, PointerArgs, SceneChannel, SceneEvent, ShapeChannel,
    ShapeEvent,
};
use crate::input::{Button, InputState, Key, Modifiers, WheelDelta};
use crate::keymap::Keymap;
use crate::render;
use crate::scene::Scene;
use crate::shape::{CircleProps, RawShape, RectProps, Shape, ShapeId};
use crate::vector::Vector;

/// Progress of an asynchronous save/load operation, relayed to subscribers.
/// `state` is `true` while the operation is in progress, `false` once done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub p: f64,
    pub state: bool,
}

/// Frames-per-second accounting over a rolling window of at least one
/// second: count frames, divide by elapsed seconds, reset the window.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    window_start_ms: f64,
    frames: u32,
    fps: f64,
}

impl FrameStats {
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self { window_start_ms: now_ms, frames: 0, fps: 0.0 }
    }

    /// Record one painted frame at the given clock reading.
    pub fn tick(&mut self, now_ms: f64) {
        self.frames += 1;
        let elapsed = (now_ms - self.window_start_ms) / 1000.0;
        if elapsed >= 1.0 {
            self.fps = f64::from(self.frames) / elapsed;
            self.frames = 0;
            self.window_start_ms = now_ms;
        }
    }

    /// Throughput measured over the last completed window.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

struct ProgressListener {
    id: ListenerId,
    callback: Box<dyn FnMut(&ProgressUpdate)>,
}

/// Core engine state — everything that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without a browser.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub config: EngineConfig,
    pub keymap: Keymap,
    /// Scene-level bus: pointer channels, `create`, and command channels.
    pub bus: EventBus<SceneChannel, SceneEvent>,
    /// Shape-level bus, keyed by `(shape, channel)`.
    pub shape_bus: EventBus<(ShapeId, ShapeChannel), ShapeEvent>,
    pub input: InputState,
    /// Last known absolute pointer position.
    pub pointer: Vector,
    /// Whether the platform zoom modifier (Control) is held.
    pub zoom_key_held: bool,
    /// Top-left of the drawing surface in absolute screen coordinates.
    pub surface_origin: Vector,
    pub surface_width: f64,
    pub surface_height: f64,
    pub frames: FrameStats,
    progress: Vec<ProgressListener>,
    next_progress_id: ListenerId,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = EngineConfig::default();
        let keymap = Keymap::new(&config.effective_keywords());
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            config,
            keymap,
            bus: EventBus::new(),
            shape_bus: EventBus::new(),
            input: InputState::Idle,
            pointer: Vector::ZERO,
            zoom_key_held: false,
            surface_origin: Vector::ZERO,
            surface_width: 0.0,
            surface_height: 0.0,
            frames: FrameStats::new(0.0),
            progress: Vec::new(),
            next_progress_id: 1,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Configuration ---

    /// Replace the whole configuration. The keymap is rebuilt from the
    /// effective bindings and the current zoom is clamped into the new
    /// bounds. May be called at any time; repeated loads are idempotent.
    pub fn load_configuration(&mut self, config: EngineConfig) {
        self.keymap.load(&config.effective_keywords());
        self.camera.zoom = self
            .camera
            .zoom
            .clamp(config.properties.min_zoom, config.properties.max_zoom);
        debug!(
            "configuration loaded: zoom={} pan={} commands={}",
            config.zoom,
            config.pan,
            self.keymap.len()
        );
        self.config = config;
    }

    /// Update the surface geometry (absolute top-left plus pixel size).
    pub fn set_surface(&mut self, origin: Vector, width: f64, height: f64) {
        self.surface_origin = origin;
        self.surface_width = width;
        self.surface_height = height;
    }

    // --- Coordinate queries ---

    /// Last known absolute pointer position.
    #[must_use]
    pub fn mouse_position(&self) -> Vector {
        self.pointer
    }

    /// Pointer position relative to the surface's top-left corner.
    #[must_use]
    pub fn relative_position(&self) -> Vector {
        self.pointer.sub(self.surface_origin)
    }

    /// Pointer position in world space.
    #[must_use]
    pub fn world_position(&self) -> Vector {
        self.to_world(self.pointer)
    }

    /// Convert an absolute screen point to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Vector) -> Vector {
        self.camera.screen_to_world(screen.sub(self.surface_origin))
    }

    /// Convert a world point back to absolute screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Vector) -> Vector {
        self.camera.world_to_screen(world).add(self.surface_origin)
    }

    /// Whether an absolute screen point lies within the surface bounds.
    #[must_use]
    pub fn pointer_in_surface(&self, screen: Vector) -> bool {
        let rel = screen.sub(self.surface_origin);
        rel.x >= 0.0 && rel.x <= self.surface_width && rel.y >= 0.0 && rel.y <= self.surface_height
    }

    fn pointer_args(&self) -> PointerArgs {
        PointerArgs { absolute: self.pointer, world: self.world_position() }
    }

    // --- Shape factory ---

    /// Create a rectangle, register it, and emit `create` on the scene bus.
    pub fn create_rect(&mut self, props: RectProps) -> ShapeId {
        self.register(Shape::rect(Uuid::new_v4(), props))
    }

    /// Create a circle, register it, and emit `create` on the scene bus.
    pub fn create_circle(&mut self, props: CircleProps) -> ShapeId {
        self.register(Shape::circle(Uuid::new_v4(), props))
    }

    /// Rehydrate a shape from a raw snapshot under its recorded id and
    /// re-emit `create`, so observers see rehydrated shapes exactly as
    /// freshly created ones.
    ///
    /// # Errors
    ///
    /// Propagates [`Shape::from_raw`] failures for incomplete snapshots.
    pub fn restore(&mut self, raw: &RawShape) -> Result<ShapeId, EngineError> {
        let shape = Shape::from_raw(raw)?;
        Ok(self.register(shape))
    }

    /// Deep-copy a shape under a fresh id and emit `create` for the copy.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownShape`] when the source id is not registered.
    pub fn clone_shape(&mut self, id: &ShapeId) -> Result<ShapeId, EngineError> {
        let Some(source) = self.scene.get(id) else {
            return Err(EngineError::UnknownShape(*id));
        };
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        Ok(self.register(copy))
    }

    fn register(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        let raw = shape.raw_data();
        self.scene.insert(shape);
        self.bus.emit(&SceneChannel::Create, &SceneEvent::Created { shape: raw });
        id
    }

    /// Destroy a shape: emit `destroy` on its bus, remove it from the
    /// registry, and drop its subscriptions. Lookups by this id fail from
    /// here on. Returns `false` for an unknown id.
    pub fn destroy_shape(&mut self, id: &ShapeId) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        let event = ShapeEvent { pointer: self.pointer_args(), target: *id };
        self.shape_bus.emit(&(*id, ShapeChannel::Destroy), &event);
        self.scene.remove(id);
        for channel in ShapeChannel::ALL {
            self.shape_bus.clear_channel(&(*id, channel));
        }
        // A destroy mid-drag must not leave the router pointing at a ghost.
        if self.input.drag_target() == Some(*id) {
            self.input = InputState::Idle;
        }
        true
    }

    // --- Input routing ---

    /// Pointer-down: emits `mousedown`, then either begins dragging the
    /// picked shape or, with the pan button over empty space, begins
    /// panning.
    pub fn on_pointer_down(&mut self, screen: Vector, button: Button) {
        self.pointer = screen;
        let args = self.pointer_args();
        self.bus.emit(
            &SceneChannel::MouseDown,
            &SceneEvent::Pointer { pointer: args, target: EventTarget::Scene },
        );

        let world = self.world_position();
        if let Some(id) = self.scene.pick(world) {
            self.input = InputState::Dragging { id, last_world: world };
            if let Some(shape) = self.scene.get_mut(&id) {
                shape.dragging = true;
            }
            self.shape_bus.emit(
                &(id, ShapeChannel::DragStart),
                &ShapeEvent { pointer: args, target: id },
            );
            return;
        }

        if button == Button::Middle && self.config.pan {
            self.input = InputState::Panning { last_world: world };
        }
    }

    /// Pointer-move: advances the active gesture by the incremental
    /// world-space delta, then emits `mousemove`.
    pub fn on_pointer_move(&mut self, screen: Vector) {
        self.pointer = screen;
        let world = self.world_position();

        match self.input {
            InputState::Dragging { id, last_world } => {
                if self.scene.contains(&id) {
                    let delta = world.sub(last_world);
                    if let Some(shape) = self.scene.get_mut(&id) {
                        shape.position = shape.position.add(delta);
                    }
                    self.input = InputState::Dragging { id, last_world: world };
                    let args = self.pointer_args();
                    self.shape_bus
                        .emit(&(id, ShapeChannel::Drag), &ShapeEvent { pointer: args, target: id });
                } else {
                    self.input = InputState::Idle;
                }
            }
            InputState::Panning { last_world } => {
                if self.config.pan {
                    let delta = world.sub(last_world);
                    for shape in self.scene.iter_mut() {
                        shape.position = shape.position.add(delta);
                    }
                }
                self.input = InputState::Panning { last_world: world };
            }
            InputState::Idle => {}
        }

        let args = self.pointer_args();
        self.bus.emit(
            &SceneChannel::MouseMove,
            &SceneEvent::Pointer { pointer: args, target: EventTarget::Scene },
        );
    }

    /// Pointer-up: emits `mouseup` and returns to `Idle` unconditionally,
    /// regardless of where the pointer is.
    pub fn on_pointer_up(&mut self, screen: Vector) {
        self.pointer = screen;
        let args = self.pointer_args();
        self.bus.emit(
            &SceneChannel::MouseUp,
            &SceneEvent::Pointer { pointer: args, target: EventTarget::Scene },
        );

        if let InputState::Dragging { id, .. } = self.input {
            if let Some(shape) = self.scene.get_mut(&id) {
                shape.dragging = false;
            }
            self.shape_bus
                .emit(&(id, ShapeChannel::DragEnd), &ShapeEvent { pointer: args, target: id });
        }
        self.input = InputState::Idle;
    }

    /// Click dispatch, independent of the drag state machine: the topmost
    /// visible shape under the pointer receives `click`; with no match the
    /// scene-level `click` fires instead. Never both.
    pub fn on_click(&mut self, screen: Vector) {
        self.pointer = screen;
        let args = self.pointer_args();
        let world = self.world_position();

        if let Some(id) = self.scene.pick(world) {
            self.shape_bus
                .emit(&(id, ShapeChannel::Click), &ShapeEvent { pointer: args, target: id });
            return;
        }
        self.bus.emit(
            &SceneChannel::Click,
            &SceneEvent::Pointer { pointer: args, target: EventTarget::Scene },
        );
    }

    /// Wheel input. Returns `false` when the pointer lies outside the
    /// surface and the event was defensively terminated.
    ///
    /// With the zoom modifier held (and zoom enabled), one multiplicative
    /// zoom step anchors the world point under the cursor. Trackpad-like
    /// deltas (any horizontal motion, or small vertical motion) pan every
    /// shape by the negated delta when panning is enabled.
    pub fn on_wheel(&mut self, screen: Vector, delta: WheelDelta) -> bool {
        self.pointer = screen;
        if !self.pointer_in_surface(screen) {
            return false;
        }

        if self.zoom_key_held && self.config.zoom {
            let props = self.config.properties;
            let next = if delta.dy < 0.0 {
                self.camera.zoom * props.zoom_factor
            } else {
                self.camera.zoom / props.zoom_factor
            };
            let next = next.clamp(props.min_zoom, props.max_zoom);
            self.camera.zoom_at(self.relative_position(), next);
        }

        let is_trackpad =
            delta.dx.abs() > 0.0 || (delta.dy.abs() < TRACKPAD_DELTA_MAX && delta.dy.abs() > 0.0);
        if is_trackpad && self.config.pan {
            let shift = Vector::new(delta.dx, delta.dy);
            for shape in self.scene.iter_mut() {
                shape.position = shape.position.sub(shift);
            }
        }
        true
    }

    /// Key-down: tracks the zoom modifier and fires every configured
    /// command whose combination exactly matches the pressed set. Returns
    /// `true` when the host should suppress the default action.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> bool {
        if key.0 == "Control" {
            self.zoom_key_held = true;
        }
        let pressed = Keymap::pressed_tokens(key, modifiers);
        let matched = self.keymap.matches(&pressed);
        for command in &matched {
            self.bus.emit(&SceneChannel::Command(command.clone()), &SceneEvent::Command);
        }
        !matched.is_empty()
    }

    /// Key-up: releases the zoom modifier.
    pub fn on_key_up(&mut self, key: &Key) {
        if key.0 == "Control" {
            self.zoom_key_held = false;
        }
    }

    // --- Progress relay ---

    /// Subscribe to save/load progress updates.
    pub fn on_progress<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&ProgressUpdate) + 'static,
    {
        let id = self.next_progress_id;
        self.next_progress_id += 1;
        self.progress.push(ProgressListener { id, callback: Box::new(callback) });
        id
    }

    /// Remove a progress subscription.
    pub fn off_progress(&mut self, id: ListenerId) -> bool {
        let before = self.progress.len();
        self.progress.retain(|l| l.id != id);
        self.progress.len() < before
    }

    /// Relay a progress notification from a persistence/export collaborator
    /// to every subscriber. `p` is clamped into `[0, 1]`.
    pub fn notify_progress(&mut self, p: f64, state: bool) {
        let update = ProgressUpdate { p: p.clamp(0.0, 1.0), state };
        for listener in &mut self.progress {
            (listener.callback)(&update);
        }
    }
}

// =============================================================
// Browser shell
// =============================================================

struct EngineInner {
    core: EngineCore,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frame_id: Option<i32>,
}

impl EngineInner {
    fn resize(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width(rect.width() as u32);
        self.canvas.set_height(rect.height() as u32);
        self.core
            .set_surface(Vector::new(rect.left(), rect.top()), rect.width(), rect.height());
    }

    fn frame_tick(&mut self) {
        self.core.frames.tick(now_ms());
        if let Err(e) = render::draw(&self.ctx, &self.core) {
            warn!("paint failed: {e:?}");
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
}

type DomCallback = Closure<dyn FnMut(web_sys::Event)>;

/// The full engine: an [`EngineCore`] bound to a canvas element, with
/// window-level input listeners and a `requestAnimationFrame` repaint loop.
///
/// Listeners attach at construction and detach in [`Engine::destroy`];
/// their lifetime is tied 1:1 to the engine rather than to ambient global
/// state.
pub struct Engine {
    inner: Rc<RefCell<EngineInner>>,
    raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    listeners: Vec<(&'static str, DomCallback)>,
}

impl Engine {
    /// Bind a new engine to the canvas, wire input listeners, and start the
    /// repaint loop.
    ///
    /// # Errors
    ///
    /// [`EngineError::ContextUnavailable`] when the canvas yields no 2D
    /// context — the engine is unusable and must not be constructed.
    /// [`EngineError::Host`] when listener wiring fails.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| EngineError::ContextUnavailable)?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;

        let inner = Rc::new(RefCell::new(EngineInner {
            core: EngineCore::new(),
            canvas,
            ctx,
            frame_id: None,
        }));

        let mut engine =
            Self { inner, raf: Rc::new(RefCell::new(None)), listeners: Vec::new() };
        engine.inner.borrow_mut().resize();
        engine.attach()?;
        engine.start();
        Ok(engine)
    }

    fn attach(&mut self) -> Result<(), EngineError> {
        let window = web_sys::window().ok_or_else(|| EngineError::Host("no window".to_owned()))?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "mousedown", false, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                inner
                    .borrow_mut()
                    .core
                    .on_pointer_down(mouse_point(mouse), Button::from_code(mouse.button()));
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "mousemove", false, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                inner.borrow_mut().core.on_pointer_move(mouse_point(mouse));
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "mouseup", false, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                inner.borrow_mut().core.on_pointer_up(mouse_point(mouse));
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "click", false, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                inner.borrow_mut().core.on_click(mouse_point(mouse));
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "wheel", true, move |event| {
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                wheel.prevent_default();
                let delta = WheelDelta { dx: wheel.delta_x(), dy: wheel.delta_y() };
                let point =
                    Vector::new(f64::from(wheel.client_x()), f64::from(wheel.client_y()));
                if !inner.borrow_mut().core.on_wheel(point, delta) {
                    wheel.stop_propagation();
                }
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "keydown", false, move |event| {
            if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
                let modifiers = Modifiers {
                    ctrl: keyboard.ctrl_key(),
                    shift: keyboard.shift_key(),
                    alt: keyboard.alt_key(),
                    meta: keyboard.meta_key(),
                };
                let suppress =
                    inner.borrow_mut().core.on_key_down(&Key(keyboard.key()), modifiers);
                if suppress {
                    keyboard.prevent_default();
                }
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&window, "keyup", false, move |event| {
            if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
                inner.borrow_mut().core.on_key_up(&Key(keyboard.key()));
            }
        })?;

        // The engine always suppresses the context-menu default action.
        self.listen(&window, "contextmenu", false, move |event| {
            event.prevent_default();
        })?;

        for name in ["resize", "orientationchange", "visibilitychange"] {
            let inner = Rc::clone(&self.inner);
            self.listen(&window, name, false, move |_event| {
                inner.borrow_mut().resize();
            })?;
        }

        Ok(())
    }

    fn listen<F>(
        &mut self,
        window: &web_sys::Window,
        name: &'static str,
        active: bool,
        handler: F,
    ) -> Result<(), EngineError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = DomCallback::new(handler);
        let result = if active {
            // Wheel needs a non-passive listener to be allowed to call
            // `preventDefault`.
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        };
        result.map_err(|e| EngineError::Host(format!("{name}: {e:?}")))?;
        self.listeners.push((name, closure));
        Ok(())
    }

    // --- Frame loop ---

    /// Start the repaint loop. A no-op when already running.
    pub fn start(&self) {
        if self.inner.borrow().frame_id.is_some() {
            return;
        }

        let inner = Rc::clone(&self.inner);
        let raf = Rc::clone(&self.raf);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut guard = inner.borrow_mut();
            // A cancelled callback that slipped through schedules nothing.
            if guard.frame_id.is_none() {
                return;
            }
            guard.frame_tick();
            guard.frame_id = schedule_frame(&raf);
        });
        *self.raf.borrow_mut() = Some(closure);
        self.inner.borrow_mut().frame_id = schedule_frame(&self.raf);
    }

    /// Stop the repaint loop, cancelling the pending callback so no further
    /// paint occurs. A no-op when already stopped.
    pub fn stop(&self) {
        let Some(frame_id) = self.inner.borrow_mut().frame_id.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(frame_id) {
                warn!("cancel_animation_frame failed: {e:?}");
            }
        }
    }

    /// Tear the engine down: stop painting and detach every input listener,
    /// leaving no dangling subscriptions.
    pub fn destroy(&mut self) {
        self.stop();
        if let Some(window) = web_sys::window() {
            for (name, closure) in self.listeners.drain(..) {
                if let Err(e) = window
                    .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                {
                    warn!("detaching {name} listener failed: {e:?}");
                }
            }
        } else {
            self.listeners.clear();
        }
        *self.raf.borrow_mut() = None;
        debug!("engine destroyed");
    }

    // --- Core access and delegation ---

    /// Read access to the engine core.
    #[must_use]
    pub fn core(&self) -> Ref<'_, EngineCore> {
        Ref::map(self.inner.borrow(), |inner| &inner.core)
    }

    /// Write access to the engine core.
    #[must_use]
    pub fn core_mut(&self) -> RefMut<'_, EngineCore> {
        RefMut::map(self.inner.borrow_mut(), |inner| &mut inner.core)
    }

    pub fn load_configuration(&self, config: EngineConfig) {
        self.core_mut().load_configuration(config);
    }

    pub fn create_rect(&self, props: RectProps) -> ShapeId {
        self.core_mut().create_rect(props)
    }

    pub fn create_circle(&self, props: CircleProps) -> ShapeId {
        self.core_mut().create_circle(props)
    }

    /// See [`EngineCore::restore`].
    ///
    /// # Errors
    ///
    /// Propagates snapshot reconstruction failures.
    pub fn restore(&self, raw: &RawShape) -> Result<ShapeId, EngineError> {
        self.core_mut().restore(raw)
    }

    /// See [`EngineCore::clone_shape`].
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownShape`] when the source id is not registered.
    pub fn clone_shape(&self, id: &ShapeId) -> Result<ShapeId, EngineError> {
        self.core_mut().clone_shape(id)
    }

    pub fn destroy_shape(&self, id: &ShapeId) -> bool {
        self.core_mut().destroy_shape(id)
    }

    /// Subscribe to a scene-level channel.
    ///
    /// Listeners run synchronously while the engine's interior state is
    /// mutably borrowed by the DOM handler that emitted the event, so a
    /// listener must not call back into this `Engine` (or take
    /// [`Engine::core_mut`]) through a shared handle — that is a
    /// guaranteed `RefCell` double-borrow panic. Command handlers that
    /// mutate the scene should record the request and apply it from the
    /// host's own control flow after the listener returns.
    pub fn on<F>(&self, channel: SceneChannel, callback: F) -> ListenerId
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        self.core_mut().bus.on(channel, callback)
    }

    /// Subscribe to a shape-level channel.
    ///
    /// The re-entrancy rule of [`Engine::on`] applies here too.
    pub fn on_shape<F>(&self, id: ShapeId, channel: ShapeChannel, callback: F) -> ListenerId
    where
        F: FnMut(&ShapeEvent) + 'static,
    {
        self.core_mut().shape_bus.on((id, channel), callback)
    }
}

fn schedule_frame(raf: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let borrowed = raf.borrow();
    let closure = borrowed.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("request_animation_frame failed: {e:?}");
            None
        }
    }
}

fn mouse_point(mouse: &MouseEvent) -> Vector {
    Vector::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()))
}

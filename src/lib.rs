//! Embeddable 2D scene engine for an interactive canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! drawing surface and a registry of positioned shape primitives, converts
//! pointer input between screen and world space under a pannable/zoomable
//! viewport, routes input to the correct shape or to the scene itself, and
//! drives a continuous repaint loop. Application-level concerns (persistence,
//! export, selection overlays) subscribe through the event surface instead of
//! living inside the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Shape registry and stacking-order bookkeeping |
//! | [`shape`] | Shape variants, hit tests, and raw snapshots |
//! | [`vector`] | Immutable 2D vector arithmetic |
//! | [`camera`] | Pan/zoom viewport and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`events`] | Typed publish/subscribe bus with named channels |
//! | [`keymap`] | Key-combination to semantic-command translation |
//! | [`config`] | Engine configuration surface |
//! | [`render`] | Scene painting and the FPS overlay |
//! | [`error`] | Engine error kinds |
//! | [`consts`] | Shared numeric constants (zoom step, trackpad threshold, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod keymap;
pub mod render;
pub mod scene;
pub mod shape;
pub mod vector;

//! Shared numeric constants for the scene crate.

// ── Viewport ────────────────────────────────────────────────────

/// Multiplicative zoom step applied per wheel notch.
pub const ZOOM_STEP_FACTOR: f64 = 1.1;

/// Smallest zoom the viewport may reach unless configured otherwise.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Largest zoom the viewport may reach unless configured otherwise.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

// ── Input ───────────────────────────────────────────────────────

/// Vertical wheel deltas below this magnitude are treated as a trackpad
/// pan gesture rather than a discrete wheel notch.
pub const TRACKPAD_DELTA_MAX: f64 = 50.0;

// ── Shape defaults ──────────────────────────────────────────────

/// Default circle radius in world units.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 10.0;

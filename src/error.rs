//! Engine error kinds.
//!
//! Construction without a usable 2D context is fatal; everything else is a
//! recoverable, caller-visible condition. Input handlers never error on
//! inapplicable state — the gesture state machine keeps them consistent.

use thiserror::Error;

use crate::shape::ShapeId;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The drawing surface did not yield a 2D rendering context.
    #[error("drawing context unavailable")]
    ContextUnavailable,

    /// A raw snapshot names a shape kind this build has no variant for.
    #[error("shape kind `{0}` is not implemented")]
    NotImplemented(String),

    /// A raw snapshot is missing a geometry field its kind requires.
    #[error("missing field `{field}` for shape kind `{kind}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// A raw snapshot failed to parse from its wire form.
    #[error("malformed shape snapshot: {0}")]
    Snapshot(String),

    /// An operation referenced a shape id absent from the registry.
    #[error("no shape with id {0}")]
    UnknownShape(ShapeId),

    /// Wiring or unwiring host event listeners failed.
    #[error("host event wiring failed: {0}")]
    Host(String),
}

//! Engine configuration surface.
//!
//! The whole configuration is applied through a single load operation and
//! may be replaced at any time. Feature toggles gate behavior inside the
//! input router; `keywords` feeds the keymap; `properties` bounds the
//! viewport transform; `save` selects which persistence backend the
//! application-level save/load hooks should target (the backends themselves
//! live outside the engine).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ZOOM_STEP_FACTOR};

/// Closed set of persistence backends a collaborator may be pointed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveTarget {
    /// No automatic persistence.
    #[default]
    None,
    /// Cookie-backed storage adapter.
    Cookies,
    /// Indexed-storage adapter.
    IndexedDb,
}

/// Numeric bounds for the viewport transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomProperties {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplicative step applied per zoom wheel notch.
    pub zoom_factor: f64,
}

impl Default for ZoomProperties {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_factor: ZOOM_STEP_FACTOR,
        }
    }
}

/// Full engine configuration.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Record mutations for undo/redo collaborators.
    pub history: bool,
    /// Allow wheel zooming while the zoom modifier is held.
    pub zoom: bool,
    /// Allow trackpad and middle-button panning.
    pub pan: bool,
    /// Enable the snapping-guide collaborator.
    pub snap: bool,
    /// Enable the resize/rotate transform overlay collaborator.
    pub transform: bool,
    /// Enable area selection.
    pub selection: bool,
    /// Persistence backend selector for save/load hooks.
    pub save: SaveTarget,
    /// Command name to `+`-joined key combination.
    pub keywords: HashMap<String, String>,
    /// Viewport bounds.
    pub properties: ZoomProperties,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history: false,
            zoom: false,
            pan: false,
            snap: false,
            transform: false,
            selection: false,
            save: SaveTarget::None,
            keywords: default_keywords(),
            properties: ZoomProperties::default(),
        }
    }
}

/// The documented default command bindings. Commands left unset by a loaded
/// configuration fall back to these.
#[must_use]
pub fn default_keywords() -> HashMap<String, String> {
    [
        ("undo", "ctrl+z"),
        ("redo", "ctrl+y"),
        ("save", "ctrl+s"),
        ("copy", "ctrl+c"),
        ("cut", "ctrl+x"),
        ("paste", "ctrl+v"),
        ("delete", "delete"),
        ("selectAll", "ctrl+a"),
        ("top", "ctrl+i"),
        ("bottom", "ctrl+k"),
        ("front", "ctrl+shift+i"),
        ("back", "ctrl+shift+k"),
    ]
    .into_iter()
    .map(|(command, combo)| (command.to_owned(), combo.to_owned()))
    .collect()
}

impl EngineConfig {
    /// Effective command bindings: the defaults overlaid with whatever the
    /// configuration set explicitly.
    #[must_use]
    pub fn effective_keywords(&self) -> HashMap<String, String> {
        let mut keywords = default_keywords();
        for (command, combo) in &self.keywords {
            keywords.insert(command.clone(), combo.clone());
        }
        keywords
    }
}

//! Key-combination to semantic-command translation.
//!
//! A keymap holds one `+`-joined token string per command name, e.g.
//! `"front" -> "ctrl+shift+i"`. On key-down the engine builds the set of
//! currently pressed tokens and asks the keymap which commands match.
//! Matching requires exact set equality — same size, same members,
//! order-independent — so `ctrl+shift+i` never fires on `ctrl+i` or on
//! `ctrl+shift+alt+i`.
//!
//! Tokens are taken literally. A binding with no `+` degenerates to a bare
//! key with no required modifiers, and a binding with duplicated tokens
//! loosens the match (membership is tested one-directionally, so
//! `ctrl+ctrl` fires on ctrl plus any single key). Both make the command
//! easier to trigger than intended; documented footguns, not errors.

#[cfg(test)]
#[path = "keymap_test.rs"]
mod keymap_test;

use std::collections::HashMap;

use crate::input::{Key, Modifiers};

/// Modifier token names, which never count as the main key.
const MODIFIER_KEYS: [&str; 4] = ["control", "shift", "alt", "meta"];

/// Compiled command bindings: command name to lower-cased token list.
pub struct Keymap {
    bindings: HashMap<String, Vec<String>>,
}

impl Keymap {
    /// Compile a `command -> "ctrl+shift+i"` mapping. Replaces nothing —
    /// use [`Keymap::load`] on an existing map for that.
    #[must_use]
    pub fn new(keywords: &HashMap<String, String>) -> Self {
        let mut map = Self { bindings: HashMap::new() };
        map.load(keywords);
        map
    }

    /// Replace the whole mapping. Idempotent: loading the same keywords
    /// twice yields the same bindings, and dispatch happens in the engine's
    /// single key-down path so a reload can never double-fire.
    pub fn load(&mut self, keywords: &HashMap<String, String>) {
        self.bindings = keywords
            .iter()
            .map(|(command, combo)| {
                let tokens = combo.split('+').map(str::to_lowercase).collect();
                (command.clone(), tokens)
            })
            .collect();
    }

    /// Build the pressed-token set for a key-down: one token per active
    /// modifier plus the lower-cased non-modifier key.
    #[must_use]
    pub fn pressed_tokens(key: &Key, modifiers: Modifiers) -> Vec<String> {
        let mut pressed = Vec::new();
        if modifiers.ctrl {
            pressed.push("ctrl".to_owned());
        }
        if modifiers.shift {
            pressed.push("shift".to_owned());
        }
        if modifiers.alt {
            pressed.push("alt".to_owned());
        }
        if modifiers.meta {
            pressed.push("meta".to_owned());
        }
        let main = key.0.to_lowercase();
        if !MODIFIER_KEYS.contains(&main.as_str()) {
            pressed.push(main);
        }
        pressed
    }

    /// Every command whose token set exactly equals the pressed set.
    /// Multiple commands fire together only when configured identically.
    #[must_use]
    pub fn matches(&self, pressed: &[String]) -> Vec<String> {
        let mut matched: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, tokens)| {
                tokens.len() == pressed.len()
                    && tokens.iter().all(|token| pressed.contains(token))
            })
            .map(|(command, _)| command.clone())
            .collect();
        matched.sort();
        matched
    }

    /// Number of configured commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

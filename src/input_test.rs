use super::*;

// --- Button mapping ---

#[test]
fn button_code_zero_is_primary() {
    assert_eq!(Button::from_code(0), Button::Primary);
}

#[test]
fn button_code_one_is_middle() {
    assert_eq!(Button::from_code(1), Button::Middle);
}

#[test]
fn button_code_two_is_secondary() {
    assert_eq!(Button::from_code(2), Button::Secondary);
}

#[test]
fn unknown_button_codes_fold_to_primary() {
    assert_eq!(Button::from_code(3), Button::Primary);
    assert_eq!(Button::from_code(4), Button::Primary);
    assert_eq!(Button::from_code(-1), Button::Primary);
}

// --- Defaults ---

#[test]
fn modifiers_default_all_clear() {
    let m = Modifiers::default();
    assert!(!m.ctrl && !m.shift && !m.alt && !m.meta);
}

#[test]
fn input_state_defaults_to_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

// --- drag_target ---

#[test]
fn idle_has_no_drag_target() {
    assert!(InputState::Idle.drag_target().is_none());
}

#[test]
fn panning_has_no_drag_target() {
    let state = InputState::Panning { last_world: Vector::ZERO };
    assert!(state.drag_target().is_none());
}

#[test]
fn dragging_reports_its_shape() {
    let id = ShapeId::new_v4();
    let state = InputState::Dragging { id, last_world: Vector::new(1.0, 2.0) };
    assert_eq!(state.drag_target(), Some(id));
}

// --- Key ---

#[test]
fn key_new_accepts_str() {
    assert_eq!(Key::new("Control"), Key("Control".to_owned()));
}

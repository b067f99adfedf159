// src/views/keyboard.rs
//
// Keyboard routing. While a number entry is focused keys edit it;
// otherwise Return/Space commit and R randomizes.

use nannou::prelude::*;

use crate::store::StoreAction;
use crate::views::SettingsPanel;

/// Handles a key press. Returns true when the key was used.
pub fn key_pressed(
    key: Key,
    settings: &mut SettingsPanel,
    dispatch: &mut impl FnMut(StoreAction),
) -> bool {
    let editing = settings.entry().is_some();

    match key {
        Key::Return | Key::NumpadEnter => {
            if !settings.submit_entry(&mut *dispatch) {
                dispatch(StoreAction::UpdateBox);
            }
            true
        }
        Key::Back => settings.backspace(),
        Key::Escape => settings.cancel_entry(),
        Key::Space if !editing => {
            dispatch(StoreAction::UpdateBox);
            true
        }
        Key::R if !editing => {
            dispatch(StoreAction::RandomizeBox);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BoxState, FieldKey};
    use crate::views::Layout;

    fn panel() -> SettingsPanel {
        SettingsPanel::new(&Layout::new(Rect::from_x_y_w_h(0.0, 0.0, 1200.0, 760.0)))
    }

    fn focus(panel: &mut SettingsPanel, key: FieldKey) {
        let field = panel.row(key).unwrap().rects.field;
        panel.mouse_pressed(field.xy(), &BoxState::default(), &mut |_| {});
        assert!(panel.entry().is_some());
    }

    #[test]
    fn test_shortcuts_without_focus() {
        let mut panel = panel();
        let mut actions = Vec::new();
        assert!(key_pressed(Key::Return, &mut panel, &mut |a| actions.push(a)));
        assert!(key_pressed(Key::Space, &mut panel, &mut |a| actions.push(a)));
        assert!(key_pressed(Key::R, &mut panel, &mut |a| actions.push(a)));
        assert!(!key_pressed(Key::Q, &mut panel, &mut |a| actions.push(a)));
        assert_eq!(
            actions,
            vec![
                StoreAction::UpdateBox,
                StoreAction::UpdateBox,
                StoreAction::RandomizeBox
            ]
        );
    }

    #[test]
    fn test_return_submits_focused_entry_without_commit() {
        let mut panel = panel();
        let mut actions = Vec::new();
        focus(&mut panel, FieldKey::Height);
        panel.received_character('0');

        assert!(key_pressed(Key::Return, &mut panel, &mut |a| actions.push(a)));
        assert_eq!(
            actions,
            vec![StoreAction::ChangeValue {
                key: FieldKey::Height,
                value: 500.0
            }]
        );
        assert!(panel.entry().is_none());
    }

    #[test]
    fn test_space_and_r_ignored_while_typing() {
        let mut panel = panel();
        let mut actions = Vec::new();
        focus(&mut panel, FieldKey::Width);

        assert!(!key_pressed(Key::Space, &mut panel, &mut |a| actions.push(a)));
        assert!(!key_pressed(Key::R, &mut panel, &mut |a| actions.push(a)));
        assert!(actions.is_empty());
        assert!(panel.entry().is_some());
    }

    #[test]
    fn test_backspace_and_escape_edit_entry() {
        let mut panel = panel();
        focus(&mut panel, FieldKey::Width);

        assert!(key_pressed(Key::Back, &mut panel, &mut |_| {}));
        assert_eq!(panel.entry().map(|e| e.text()), Some("30"));
        assert!(key_pressed(Key::Escape, &mut panel, &mut |_| {}));
        assert!(panel.entry().is_none());
        assert!(!key_pressed(Key::Escape, &mut panel, &mut |_| {}));
    }
}

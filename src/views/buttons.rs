// src/views/buttons.rs

use nannou::prelude::*;

use crate::store::StoreAction;
use crate::views::Layout;

#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: StoreAction,
}

#[derive(Debug, Clone)]
pub struct Buttons {
    pub commit: Button,
    pub randomize: Button,
    pressed: Option<StoreAction>,
}

impl Buttons {
    pub fn new(layout: &Layout) -> Self {
        Self {
            commit: Button {
                label: "Commit changes",
                rect: layout.commit_button,
                action: StoreAction::UpdateBox,
            },
            randomize: Button {
                label: "Randomize box",
                rect: layout.randomize_button,
                action: StoreAction::RandomizeBox,
            },
            pressed: None,
        }
    }

    pub fn relayout(&mut self, layout: &Layout) {
        self.commit.rect = layout.commit_button;
        self.randomize.rect = layout.randomize_button;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        [&self.commit, &self.randomize].into_iter()
    }

    pub fn hit(&self, pos: Point2) -> Option<&Button> {
        self.iter().find(|button| button.rect.contains(pos))
    }

    pub fn is_pressed(&self, button: &Button) -> bool {
        self.pressed == Some(button.action)
    }

    /// Arms the button under the pointer. It fires on release.
    pub fn mouse_pressed(&mut self, pos: Point2) -> bool {
        self.pressed = self.hit(pos).map(|button| button.action);
        self.pressed.is_some()
    }

    /// Fires the armed button if the pointer is still over it.
    pub fn mouse_released(&mut self, pos: Point2, dispatch: &mut impl FnMut(StoreAction)) {
        if let Some(armed) = self.pressed.take() {
            if let Some(button) = self.hit(pos) {
                if button.action == armed {
                    dispatch(armed);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons() -> Buttons {
        Buttons::new(&Layout::new(Rect::from_x_y_w_h(0.0, 0.0, 1200.0, 760.0)))
    }

    #[test]
    fn test_click_fires_action() {
        let mut buttons = buttons();
        let mut fired = Vec::new();
        let centre = buttons.commit.rect.xy();

        assert!(buttons.mouse_pressed(centre));
        assert!(buttons.is_pressed(&buttons.commit.clone()));
        buttons.mouse_released(centre, &mut |a| fired.push(a));
        assert_eq!(fired, vec![StoreAction::UpdateBox]);

        let centre = buttons.randomize.rect.xy();
        buttons.mouse_pressed(centre);
        buttons.mouse_released(centre, &mut |a| fired.push(a));
        assert_eq!(fired, vec![StoreAction::UpdateBox, StoreAction::RandomizeBox]);
    }

    #[test]
    fn test_release_elsewhere_cancels() {
        let mut buttons = buttons();
        let mut fired = Vec::new();
        buttons.mouse_pressed(buttons.commit.rect.xy());
        buttons.mouse_released(buttons.randomize.rect.xy(), &mut |a| fired.push(a));
        assert!(fired.is_empty());
    }

    #[test]
    fn test_miss() {
        let mut buttons = buttons();
        assert!(!buttons.mouse_pressed(pt2(10_000.0, 10_000.0)));
        assert!(buttons.hit(pt2(10_000.0, 10_000.0)).is_none());
    }
}

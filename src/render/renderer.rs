// src/render/renderer.rs
//
// Draws one frame of the app: title, settings panel, buttons, status line
// and the animated box inside its container.

use nannou::prelude::*;

use crate::animation::AnimatedBox;
use crate::render::Theme;
use crate::store::BoxState;
use crate::views::{Buttons, Layout, SettingsPanel};

const TITLE: &str = "Change the box properties!";
const BOX_TEXT: &str = "I am an animated box! I am really fun!";
const HANDLE_RADIUS: f32 = 8.0;
const TRACK_THICKNESS: f32 = 4.0;
const TEXT_PADDING: f32 = 12.0;

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn draw(
        &self,
        draw: &Draw,
        layout: &Layout,
        state: &BoxState,
        panel: &SettingsPanel,
        buttons: &Buttons,
        animated: &AnimatedBox,
    ) {
        draw.background().color(WHITE);
        self.draw_title(draw, layout);
        self.draw_settings(draw, layout, state, panel);
        self.draw_buttons(draw, buttons);
        self.draw_status(draw, layout, state, animated);
        self.draw_box_area(draw, layout, animated);
    }

    fn draw_title(&self, draw: &Draw, layout: &Layout) {
        let title = layout.title;
        draw.rect()
            .xy(title.xy())
            .wh(title.wh())
            .color(self.theme.title_color);
        draw.text(TITLE)
            .xy(title.xy())
            .wh(title.wh())
            .font_size(self.theme.title_font_size)
            .color(WHITE);
    }

    fn draw_settings(
        &self,
        draw: &Draw,
        layout: &Layout,
        state: &BoxState,
        panel: &SettingsPanel,
    ) {
        draw.rect()
            .xy(layout.panel.xy())
            .wh(layout.panel.wh())
            .color(self.theme.panel_color);

        for row in &panel.rows {
            let value = state.get(row.key);
            let rects = &row.rects;

            draw.text(row.key.as_str())
                .xy(rects.label.xy())
                .wh(rects.label.wh())
                .font_size(self.theme.font_size)
                .left_justify()
                .color(self.theme.text_color);

            // range track
            draw.rect()
                .xy(rects.track.xy())
                .w_h(rects.track.w(), TRACK_THICKNESS)
                .color(self.theme.track_color);
            draw.ellipse()
                .x_y(row.handle_x(value), rects.track.y())
                .radius(HANDLE_RADIUS)
                .color(self.theme.accent_color);

            // exact value field
            let editing = panel.entry().filter(|entry| entry.key == row.key);
            let text = match editing {
                Some(entry) => format!("{}|", entry.text()),
                None => row.spec.format(value),
            };
            let border = if editing.is_some() {
                self.theme.accent_color
            } else {
                self.theme.track_color
            };
            draw.rect()
                .xy(rects.field.xy())
                .wh(rects.field.wh())
                .color(WHITE)
                .stroke(border)
                .stroke_weight(1.5);
            draw.text(&text)
                .xy(rects.field.xy())
                .wh(rects.field.wh())
                .font_size(self.theme.font_size)
                .color(self.theme.text_color);
        }
    }

    fn draw_buttons(&self, draw: &Draw, buttons: &Buttons) {
        for button in buttons.iter() {
            let fill = if buttons.is_pressed(button) {
                self.theme.title_color
            } else {
                self.theme.accent_color
            };
            draw.rect()
                .xy(button.rect.xy())
                .wh(button.rect.wh())
                .color(fill);
            draw.text(button.label)
                .xy(button.rect.xy())
                .wh(button.rect.wh())
                .font_size(self.theme.font_size)
                .color(WHITE);
        }
    }

    fn draw_status(&self, draw: &Draw, layout: &Layout, state: &BoxState, animated: &AnimatedBox) {
        let committed = state.box_props;
        let spring = state.spring_props;
        let text = format!(
            "{}\ncommitted: x {} y {} w {} h {}\nspring: mass {} tension {} friction {}",
            animated.phase().label(),
            committed.x,
            committed.y,
            committed.w,
            committed.h,
            spring.mass,
            spring.tension,
            spring.friction,
        );
        draw.text(&text)
            .xy(layout.status.xy())
            .wh(layout.status.wh())
            .font_size(self.theme.font_size)
            .left_justify()
            .color(self.theme.text_color);
    }

    fn draw_box_area(&self, draw: &Draw, layout: &Layout, animated: &AnimatedBox) {
        let area = layout.box_area;
        draw.rect()
            .xy(area.xy())
            .wh(area.wh())
            .color(self.theme.container_color)
            .stroke(BLACK)
            .stroke_weight(crate::views::layout::BORDER);

        let current = animated.current();
        let rect = layout.box_rect(current.x, current.y, current.w.max(0.0), current.h.max(0.0));
        draw.rect()
            .xy(rect.xy())
            .wh(rect.wh())
            .color(self.theme.box_color);

        if rect.w() > 2.0 * TEXT_PADDING && rect.h() > 2.0 * TEXT_PADDING {
            draw.text(BOX_TEXT)
                .xy(rect.xy())
                .w_h(rect.w() - 2.0 * TEXT_PADDING, rect.h() - 2.0 * TEXT_PADDING)
                .font_size(self.theme.font_size)
                .color(self.theme.text_color);
        }
    }
}

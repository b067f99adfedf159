// src/views/layout.rs
//
// Screen geometry, computed from the window rect (nannou coordinates:
// origin in the middle, y up). Title across the top, settings on the left,
// the box area fills the rest.

use nannou::prelude::*;

use crate::store::FieldKey;

pub const TITLE_HEIGHT: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 460.0;
pub const MARGIN: f32 = 20.0;
pub const ROW_HEIGHT: f32 = 44.0;
pub const LABEL_WIDTH: f32 = 100.0;
pub const FIELD_WIDTH: f32 = 90.0;
pub const CONTROL_HEIGHT: f32 = 24.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BORDER: f32 = 4.0;

/// The three parts of a settings row.
#[derive(Debug, Clone, Copy)]
pub struct RowRects {
    pub label: Rect,
    pub track: Rect,
    pub field: Rect,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub window: Rect,
    pub title: Rect,
    pub panel: Rect,
    pub box_area: Rect,
    pub rows: Vec<RowRects>,
    pub commit_button: Rect,
    pub randomize_button: Rect,
    pub status: Rect,
}

impl Layout {
    pub fn new(window: Rect) -> Self {
        let title = Rect::from_x_y_w_h(
            window.x(),
            window.top() - TITLE_HEIGHT / 2.0,
            window.w(),
            TITLE_HEIGHT,
        );

        let body_top = window.top() - TITLE_HEIGHT;
        let body_h = (window.h() - TITLE_HEIGHT).max(0.0);

        let panel = Rect::from_x_y_w_h(
            window.left() + PANEL_WIDTH / 2.0,
            body_top - body_h / 2.0,
            PANEL_WIDTH,
            body_h,
        );

        let area_w = (window.w() - PANEL_WIDTH - 2.0 * MARGIN).max(0.0);
        let area_h = (body_h - 2.0 * MARGIN).max(0.0);
        let box_area = Rect::from_x_y_w_h(
            panel.right() + MARGIN + area_w / 2.0,
            body_top - MARGIN - area_h / 2.0,
            area_w,
            area_h,
        );

        let inner_left = panel.left() + MARGIN;
        let inner_w = PANEL_WIDTH - 2.0 * MARGIN;
        let track_w = inner_w - LABEL_WIDTH - FIELD_WIDTH - 2.0 * MARGIN;

        let rows = (0..FieldKey::ALL.len())
            .map(|i| {
                let y = body_top - MARGIN - ROW_HEIGHT * (i as f32 + 0.5);
                RowRects {
                    label: Rect::from_x_y_w_h(
                        inner_left + LABEL_WIDTH / 2.0,
                        y,
                        LABEL_WIDTH,
                        CONTROL_HEIGHT,
                    ),
                    track: Rect::from_x_y_w_h(
                        inner_left + LABEL_WIDTH + MARGIN + track_w / 2.0,
                        y,
                        track_w,
                        CONTROL_HEIGHT,
                    ),
                    field: Rect::from_x_y_w_h(
                        inner_left + inner_w - FIELD_WIDTH / 2.0,
                        y,
                        FIELD_WIDTH,
                        CONTROL_HEIGHT,
                    ),
                }
            })
            .collect::<Vec<_>>();

        let rows_bottom = body_top - MARGIN - ROW_HEIGHT * FieldKey::ALL.len() as f32;
        let button_y = rows_bottom - MARGIN - BUTTON_HEIGHT / 2.0;
        let button_w = (inner_w - MARGIN) / 2.0;
        let commit_button = Rect::from_x_y_w_h(
            inner_left + button_w / 2.0,
            button_y,
            button_w,
            BUTTON_HEIGHT,
        );
        let randomize_button = Rect::from_x_y_w_h(
            inner_left + button_w + MARGIN + button_w / 2.0,
            button_y,
            button_w,
            BUTTON_HEIGHT,
        );

        let status = Rect::from_x_y_w_h(
            panel.x(),
            button_y - BUTTON_HEIGHT / 2.0 - MARGIN - CONTROL_HEIGHT * 1.5,
            inner_w,
            CONTROL_HEIGHT * 3.0,
        );

        Self {
            window,
            title,
            panel,
            box_area,
            rows,
            commit_button,
            randomize_button,
            status,
        }
    }

    /// Maps a box-model rect (offset from the area's top-left, y down) to screen space.
    pub fn box_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let left = self.box_area.left() + BORDER + x;
        let top = self.box_area.top() - BORDER - y;
        Rect::from_x_y_w_h(left + w / 2.0, top - h / 2.0, w, h)
    }
}

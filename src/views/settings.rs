// src/views/settings.rs
//
// The settings panel: one range + exact-value pair per raw field.
// Rows never hold store state. They read the current BoxState and hand
// actions to whatever dispatch callback the caller passes in.

use nannou::prelude::*;

use crate::store::{BoxState, FieldKey, StoreAction};
use crate::views::{Layout, NumberEntry, RowRects};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl RangeSpec {
    pub fn for_key(key: FieldKey) -> Self {
        let (min, max, step) = match key {
            FieldKey::Width | FieldKey::Height => (1.0, 600.0, 1.0),
            FieldKey::XOffset | FieldKey::YOffset => (0.0, 500.0, 1.0),
            FieldKey::Mass => (0.1, 10.0, 0.1),
            FieldKey::Tension => (1.0, 500.0, 1.0),
            FieldKey::Friction => (1.0, 100.0, 1.0),
            FieldKey::Precision => (0.001, 1.0, 0.001),
            FieldKey::Velocity => (-10.0, 10.0, 0.1),
        };
        Self { min, max, step }
    }

    /// Decimal places implied by the step size.
    pub fn decimals(&self) -> usize {
        let mut decimals = 0;
        let mut step = self.step;
        while (step - step.round()).abs() > 1e-4 && decimals < 6 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }

    pub fn format(&self, value: f32) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

#[derive(Debug, Clone)]
pub struct SettingRow {
    pub key: FieldKey,
    pub spec: RangeSpec,
    pub rects: RowRects,
    // last number typed into this row; widens the track, never reaches the store
    last_entered: Option<f32>,
}

impl SettingRow {
    pub fn new(key: FieldKey, rects: RowRects) -> Self {
        Self {
            key,
            spec: RangeSpec::for_key(key),
            rects,
            last_entered: None,
        }
    }

    pub fn last_entered(&self) -> Option<f32> {
        self.last_entered
    }

    pub fn display_max(&self) -> f32 {
        match self.last_entered {
            Some(entered) if entered > self.spec.max => entered,
            _ => self.spec.max,
        }
    }

    /// Value under a pointer x position on the track, snapped to the step.
    pub fn value_at(&self, x: f32) -> f32 {
        let track = self.rects.track;
        let t = if track.w() > 0.0 {
            ((x - track.left()) / track.w()).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let min = self.spec.min;
        let max = self.display_max();
        let steps = ((max - min) * t / self.spec.step).round();
        (min + steps * self.spec.step).min(max)
    }

    /// Screen x of the track handle for `value`. Out-of-range values pin to the ends.
    pub fn handle_x(&self, value: f32) -> f32 {
        let track = self.rects.track;
        let span = self.display_max() - self.spec.min;
        let t = if span > 0.0 {
            ((value - self.spec.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        track.left() + t * track.w()
    }
}

#[derive(Debug, Clone)]
pub struct SettingsPanel {
    pub rows: Vec<SettingRow>,
    dragging: Option<usize>,
    entry: Option<NumberEntry>,
}

impl SettingsPanel {
    pub fn new(layout: &Layout) -> Self {
        let rows = FieldKey::ALL
            .into_iter()
            .zip(layout.rows.iter())
            .map(|(key, rects)| SettingRow::new(key, *rects))
            .collect();
        Self {
            rows,
            dragging: None,
            entry: None,
        }
    }

    pub fn relayout(&mut self, layout: &Layout) {
        for (row, rects) in self.rows.iter_mut().zip(layout.rows.iter()) {
            row.rects = *rects;
        }
    }

    pub fn row(&self, key: FieldKey) -> Option<&SettingRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn entry(&self) -> Option<&NumberEntry> {
        self.entry.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn mouse_pressed(
        &mut self,
        pos: Point2,
        state: &BoxState,
        dispatch: &mut impl FnMut(StoreAction),
    ) -> bool {
        // clicking anywhere but the focused field drops the edit
        if let Some(entry) = &self.entry {
            let focused = self.row(entry.key).map(|row| row.rects.field);
            if !focused.is_some_and(|field| field.contains(pos)) {
                self.entry = None;
            }
        }

        for (index, row) in self.rows.iter().enumerate() {
            if row.rects.track.contains(pos) {
                self.dragging = Some(index);
                dispatch(StoreAction::ChangeValue {
                    key: row.key,
                    value: row.value_at(pos.x),
                });
                return true;
            }
            if row.rects.field.contains(pos) {
                if self.entry.as_ref().map(|e| e.key) != Some(row.key) {
                    let text = row.spec.format(state.get(row.key));
                    self.entry = Some(NumberEntry::new(row.key, &text));
                }
                return true;
            }
        }
        false
    }

    pub fn mouse_moved(&mut self, pos: Point2, dispatch: &mut impl FnMut(StoreAction)) {
        if let Some(row) = self.dragging.and_then(|index| self.rows.get(index)) {
            dispatch(StoreAction::ChangeValue {
                key: row.key,
                value: row.value_at(pos.x),
            });
        }
    }

    pub fn mouse_released(&mut self) {
        self.dragging = None;
    }

    /// Routes a typed character to the focused entry, if any.
    pub fn received_character(&mut self, ch: char) -> bool {
        match &mut self.entry {
            Some(entry) => {
                entry.push(ch);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match &mut self.entry {
            Some(entry) => {
                entry.backspace();
                true
            }
            None => false,
        }
    }

    pub fn cancel_entry(&mut self) -> bool {
        self.entry.take().is_some()
    }

    /// Commits the focused entry to its field. Unparseable text is dropped.
    pub fn submit_entry(&mut self, dispatch: &mut impl FnMut(StoreAction)) -> bool {
        let Some(entry) = self.entry.take() else {
            return false;
        };
        if let Some(value) = entry.parse() {
            if let Some(row) = self.rows.iter_mut().find(|row| row.key == entry.key) {
                row.last_entered = Some(value);
            }
            dispatch(StoreAction::ChangeValue {
                key: entry.key,
                value,
            });
        }
        true
    }
}

// src/views/mod.rs

pub mod buttons;
pub mod keyboard;
pub mod layout;
pub mod number_entry;
pub mod settings;

pub use buttons::{Button, Buttons};
pub use layout::{Layout, RowRects};
pub use number_entry::NumberEntry;
pub use settings::{RangeSpec, SettingRow, SettingsPanel};

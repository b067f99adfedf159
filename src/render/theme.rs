// src/render/theme.rs

use nannou::prelude::*;

use crate::config::StyleConfig;

#[derive(Debug, Clone)]
pub struct Theme {
    pub box_color: Srgb<u8>,
    pub title_color: Srgb<u8>,
    pub panel_color: Srgb<u8>,
    pub container_color: Srgba<f32>,
    pub text_color: Srgb<u8>,
    pub track_color: Srgb<u8>,
    pub accent_color: Srgb<u8>,
    pub font_size: u32,
    pub title_font_size: u32,
}

impl From<&StyleConfig> for Theme {
    fn from(style: &StyleConfig) -> Self {
        let [br, bg, bb] = style.box_color;
        let [tr, tg, tb] = style.title_color;
        let [pr, pg, pb] = style.panel_color;
        Self {
            box_color: rgb8(br, bg, bb),
            title_color: rgb8(tr, tg, tb),
            panel_color: rgb8(pr, pg, pb),
            container_color: srgba(0.0, 0.0, 0.0, style.container_alpha),
            text_color: rgb8(0x1a, 0x20, 0x2c),
            track_color: rgb8(0xcb, 0xd5, 0xe0),
            accent_color: rgb8(tr, tg, tb),
            font_size: style.font_size,
            title_font_size: style.title_font_size,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

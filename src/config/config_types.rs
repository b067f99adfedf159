// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "springbox".to_string(),
            width: 1200,
            height: 760,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub font_size: u32,
    pub title_font_size: u32,
    pub box_color: [u8; 3],
    pub title_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub container_alpha: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            title_font_size: 24,
            box_color: [0xfc, 0x81, 0x81],
            title_color: [0x55, 0x3c, 0x9a],
            panel_color: [0xf5, 0xf5, 0xf5],
            container_alpha: 0.925,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub max_frame_delta: f32, // seconds
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.1,
        }
    }
}

impl AnimationConfig {
    pub const MIN_FRAME_DELTA: f32 = 1e-3;

    /// The configured cap, or None when it is NaN or below MIN_FRAME_DELTA.
    pub fn checked_frame_delta(&self) -> Option<f32> {
        (self.max_frame_delta >= Self::MIN_FRAME_DELTA).then_some(self.max_frame_delta)
    }

    /// Cap fed to the spring integrator. Unusable values fall back to the default.
    pub fn frame_delta_cap(&self) -> f32 {
        self.checked_frame_delta()
            .unwrap_or_else(|| Self::default().max_frame_delta)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta_cap_passes_valid_values() {
        let config = AnimationConfig {
            max_frame_delta: 0.05,
        };
        assert_eq!(config.checked_frame_delta(), Some(0.05));
        assert_eq!(config.frame_delta_cap(), 0.05);
    }

    #[test]
    fn test_frame_delta_cap_rejects_unusable_values() {
        for bad in [0.0, -0.5, f32::NAN, 1e-6] {
            let config = AnimationConfig {
                max_frame_delta: bad,
            };
            assert_eq!(config.checked_frame_delta(), None);
            assert_eq!(config.frame_delta_cap(), 0.1);
        }
    }
}

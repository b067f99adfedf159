// src/store/state.rs
//
// The single state record behind the animated box.
// Raw fields are edited live; box_props and spring_props are snapshots
// refreshed only by `computed()`.

use std::fmt;
use std::str::FromStr;

use crate::store::StoreError;

/// A directly user-editable numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Width,
    Height,
    XOffset,
    YOffset,
    Mass,
    Tension,
    Friction,
    Precision,
    Velocity,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Width,
        FieldKey::Height,
        FieldKey::XOffset,
        FieldKey::YOffset,
        FieldKey::Mass,
        FieldKey::Tension,
        FieldKey::Friction,
        FieldKey::Precision,
        FieldKey::Velocity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Width => "width",
            FieldKey::Height => "height",
            FieldKey::XOffset => "xOffset",
            FieldKey::YOffset => "yOffset",
            FieldKey::Mass => "mass",
            FieldKey::Tension => "tension",
            FieldKey::Friction => "friction",
            FieldKey::Precision => "precision",
            FieldKey::Velocity => "velocity",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| StoreError::UnknownField(s.to_string()))
    }
}

/// Position and size the box animates towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxProps {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Spring physics the box animates with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringProps {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    pub precision: f32,
    pub velocity: f32,
}

impl Default for SpringProps {
    fn default() -> Self {
        Self {
            mass: 1.0,
            tension: 170.0,
            friction: 26.0,
            precision: 0.01,
            velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxState {
    // raw fields
    pub width: f32,
    pub height: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    pub precision: f32,
    pub velocity: f32,

    // derived snapshots
    pub box_props: BoxProps,
    pub spring_props: SpringProps,
}

impl Default for BoxState {
    fn default() -> Self {
        let spring = SpringProps::default();
        let raw = Self {
            width: 300.0,
            height: 50.0,
            x_offset: 0.0,
            y_offset: 0.0,
            mass: spring.mass,
            tension: spring.tension,
            friction: spring.friction,
            precision: spring.precision,
            velocity: spring.velocity,
            box_props: BoxProps {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 0.0,
            },
            spring_props: spring,
        };
        raw.computed()
    }
}

impl BoxState {
    pub fn get(&self, key: FieldKey) -> f32 {
        match key {
            FieldKey::Width => self.width,
            FieldKey::Height => self.height,
            FieldKey::XOffset => self.x_offset,
            FieldKey::YOffset => self.y_offset,
            FieldKey::Mass => self.mass,
            FieldKey::Tension => self.tension,
            FieldKey::Friction => self.friction,
            FieldKey::Precision => self.precision,
            FieldKey::Velocity => self.velocity,
        }
    }

    /// A copy of this record with one raw field replaced. Snapshots are untouched.
    pub fn with_value(&self, key: FieldKey, value: f32) -> Self {
        let mut next = self.clone();
        let slot = match key {
            FieldKey::Width => &mut next.width,
            FieldKey::Height => &mut next.height,
            FieldKey::XOffset => &mut next.x_offset,
            FieldKey::YOffset => &mut next.y_offset,
            FieldKey::Mass => &mut next.mass,
            FieldKey::Tension => &mut next.tension,
            FieldKey::Friction => &mut next.friction,
            FieldKey::Precision => &mut next.precision,
            FieldKey::Velocity => &mut next.velocity,
        };
        *slot = value;
        next
    }

    /// A copy of this record with both snapshots recomputed from the raw fields.
    pub fn computed(&self) -> Self {
        Self {
            box_props: BoxProps {
                x: self.x_offset,
                y: self.y_offset,
                w: self.width,
                h: self.height,
            },
            spring_props: SpringProps {
                mass: self.mass,
                tension: self.tension,
                friction: self.friction,
                precision: self.precision,
                velocity: self.velocity,
            },
            ..self.clone()
        }
    }
}

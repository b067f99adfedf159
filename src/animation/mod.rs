// src/animation/mod.rs

pub mod animated_box;
pub mod spring;

pub use animated_box::{AnimatedBox, AnimationPhase};
pub use spring::Spring;

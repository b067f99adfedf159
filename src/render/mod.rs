// src/render/mod.rs
// Frame drawing for the app

pub mod renderer;
pub mod theme;

pub use renderer::Renderer;
pub use theme::Theme;

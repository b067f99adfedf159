// src/lib.rs

pub mod animation;
pub mod config;
pub mod render;
pub mod store;
pub mod views;

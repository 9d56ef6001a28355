//! Pac Dialog library crate.

pub mod app;
pub mod asset;
pub mod audio;
pub mod camera;
pub mod constants;
pub mod direction;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod geometry;
pub mod map;
pub mod platform;
pub mod prompts;
pub mod recorder;
pub mod render;
pub mod sprite;
pub mod textbox;
pub mod texture;
pub mod world;

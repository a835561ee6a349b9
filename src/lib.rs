//! MoodMagic backend - generates branding moodboards from a vibe description
//!
//! Builds a prompt from the caller's theme, style and mood, asks a text
//! generation model for palette, typography and copy, normalizes the reply
//! into a fixed shape, adds reference images from an image search and
//! stores the combined moodboard.

pub mod ai;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod images;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod store;

pub use error::{Error, Result};

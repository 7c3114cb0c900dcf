//! Warchief Core - Shared types for the Warchief client
//!
//! This crate provides the presentation primitives shared by the game
//! logic and the editor panels:
//! - RGBA color type with hex helpers
//! - The palette used for balance badges and rarity text

pub mod types;

pub use types::{palette, Color};

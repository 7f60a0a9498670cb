//! Canvas client for Pong
//!
//! The page owns the `requestAnimationFrame` loop and the DOM listeners and
//! forwards them here; the simulation itself lives in `game_core`.
//! Note: the bindings are only compiled for the wasm32 target

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod client;

#[cfg(target_arch = "wasm32")]
pub use client::*;

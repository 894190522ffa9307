//! Number-guessing game.
//!
//! - **[`game`]**: the secret draw and the per-guess verdict. No I/O.
//! - **[`session`]**: the prompt/read/hint loop over a [`console_io::console::Console`].
//! - **[`config`]**: bounds and an optional seed for the draw.

pub mod config;
pub mod game;
pub mod session;

//! Menu-driven arithmetic calculator.
//!
//! - **[`menu`]**: the numbered menu and its closed set of choices.
//! - **[`ops`]**: pure arithmetic, with guarded division and modulus.
//! - **[`session`]**: the choice/operands/compute/report loop.
//! - **[`config`]**: display precision.

pub mod config;
pub mod menu;
pub mod ops;
pub mod session;

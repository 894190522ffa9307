//! Stable exit codes for the console programs.

/// Session ended normally (correct guess, menu exit, or calculator input closed).
pub const OK: i32 = 0;
/// Startup failed: bad config, unreadable config file, or a broken stdio stream.
pub const INVALID: i32 = 1;
/// The guessing game ran out of input before the number was guessed.
pub const ABANDONED: i32 = 2;

//! Text helpers (ANSI skipping, width calculations, wrapping, truncation).
//!
//! These helpers are pure (string in/string out) and live under `core` so widgets can depend on
//! them without importing anything from the render layer.

pub mod ansi;
pub mod width;
pub mod wrap;

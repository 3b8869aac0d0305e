//! Rendering pipeline.

pub mod frame;
pub mod screen;

pub use frame::Frame;
pub use screen::ScreenRenderer;

//! Runtime orchestration.

pub mod queue;
pub mod tui;

pub use queue::EventQueue;
pub use tui::TuiRuntime;

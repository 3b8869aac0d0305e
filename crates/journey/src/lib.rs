pub mod app;
pub mod cli;
pub mod logging;
pub mod render;
pub mod session;
pub mod style;
pub mod view;

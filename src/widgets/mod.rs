//! Widgets used by the journal screen.

pub mod item_list;
pub mod line_input;
pub mod viewport;

pub use item_list::{ItemList, ListItem};
pub use line_input::LineInput;
pub use viewport::Viewport;

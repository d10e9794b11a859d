//! Reusable widgets.

pub mod status_bar;
pub mod tabs;

pub use status_bar::{KeyHint, StatusBar};
pub use tabs::TabBar;

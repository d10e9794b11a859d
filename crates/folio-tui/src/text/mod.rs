//! Text processing: display width, wrapping, and markdown rendering.

pub mod markdown;
pub mod styles;
pub mod width;
pub mod wrap;

pub use markdown::render_markdown;
pub use width::{truncate_to_width, visual_width};
pub use wrap::{wrap_lines, wrap_text, wrapped_height};

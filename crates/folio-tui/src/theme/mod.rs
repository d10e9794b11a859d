//! Theming: color palettes and icon sets.

pub mod colors;
pub mod icons;

pub use colors::{Theme, ThemeKind};
pub use icons::{IconMode, IconSet};

//! folio-core: Headless content model and view-state controllers
//!
//! This crate provides the non-visual half of folio, including:
//! - Immutable portfolio content (profile, timeline, projects, tech groups)
//! - The expandable panel controller behind the About timeline
//! - The category filter and show-more pager behind the project gallery
//! - Persisted user settings

pub mod config;
pub mod content;
pub mod gallery;
pub mod panel;

// Re-export commonly used types
pub use config::{ConfigError, Settings};
pub use content::{
    Certification, ContentError, Education, EntryKind, Portfolio, Profile, Project, TechBadge,
    TechGroup, TechItem, TimelineEntry,
};
pub use gallery::{Category, Gallery, GalleryError, INITIAL_VISIBLE};
pub use panel::{
    ExpansionState, HeightTarget, MaxHeight, PanelController, TransitionProperty,
    COLLAPSED_MAX_HEIGHT, OVERFLOW_TOLERANCE,
};

/// Returns the core library version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Project gallery filtering and pagination.
//!
//! Derives the visible project list from the full list, an active category
//! selection, and a show-more flag. The full list is owned and never
//! reordered; filtering preserves original order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Project;

/// Projects shown per category before "Show more" kicks in.
pub const INITIAL_VISIBLE: usize = 6;

/// Errors from gallery operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// The named category is not part of the fixed enumeration.
    #[error("unknown category: {0:?}")]
    InvalidCategory(String),
}

/// Project category filter.
///
/// `All` is the catch-all selection; projects themselves only carry the
/// concrete categories. Serialized form is the canonical display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    Systems,
}

impl Category {
    /// All categories in display order, `All` first.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::WebDevelopment,
        Category::AiMl,
        Category::ComputerVision,
        Category::Systems,
    ];

    /// Canonical display name.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::WebDevelopment => "Web Development",
            Category::AiMl => "AI/ML",
            Category::ComputerVision => "Computer Vision",
            Category::Systems => "Systems",
        }
    }

    /// Parse a canonical display name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self, GalleryError> {
        let trimmed = name.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GalleryError::InvalidCategory(name.to_string()))
    }

    /// Whether a project belongs under this filter.
    pub fn matches(self, project: &Project) -> bool {
        self == Category::All || project.categories.contains(&self)
    }

    /// Next category in display order, wrapping.
    pub fn next(self) -> Self {
        let idx = Category::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Category::ALL[(idx + 1) % Category::ALL.len()]
    }

    /// Previous category in display order, wrapping.
    pub fn prev(self) -> Self {
        let idx = Category::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Category::ALL[(idx + Category::ALL.len() - 1) % Category::ALL.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Gallery view state over an owned project list.
#[derive(Debug, Default)]
pub struct Gallery {
    projects: Vec<Project>,
    selected: Category,
    show_all: bool,
}

impl Gallery {
    /// Create a gallery over the given projects, `All` selected, collapsed.
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected: Category::All,
            show_all: false,
        }
    }

    /// The full unfiltered project list, in original order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The active category selection.
    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Whether the pager is expanded past the first page.
    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Select a category. Always resets the pager to collapsed.
    pub fn select(&mut self, category: Category) {
        self.selected = category;
        self.show_all = false;
    }

    /// Select a category by display name.
    ///
    /// Unknown names fail with [`GalleryError::InvalidCategory`] and leave
    /// both the selection and the pager untouched.
    pub fn select_named(&mut self, name: &str) -> Result<(), GalleryError> {
        let category = Category::parse(name)?;
        self.select(category);
        Ok(())
    }

    /// Flip the show-more pager.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Projects matching the current selection, original order preserved.
    pub fn filtered(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| self.selected.matches(p))
    }

    /// The projects to render: the first page unless the pager is expanded.
    pub fn visible(&self) -> Vec<&Project> {
        let take = if self.show_all {
            usize::MAX
        } else {
            INITIAL_VISIBLE
        };
        self.filtered().take(take).collect()
    }

    /// Matches beyond the first page while collapsed; what the
    /// "Show more projects (N more)" label reports.
    pub fn hidden_count(&self) -> usize {
        if self.show_all {
            0
        } else {
            self.filtered().count().saturating_sub(INITIAL_VISIBLE)
        }
    }

    /// Whether the show-more/show-less control should render at all.
    pub fn shows_pager(&self) -> bool {
        self.filtered().count() > INITIAL_VISIBLE
    }

    /// Count over the full, unfiltered list for a category's tab badge.
    ///
    /// Independent of the active selection; not `filtered().count()`.
    pub fn category_count(&self, category: Category) -> usize {
        self.projects
            .iter()
            .filter(|p| category.matches(p))
            .count()
    }
}

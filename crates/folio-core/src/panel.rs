//! Expandable panel state management.
//!
//! Tracks, per timeline entry, whether the panel is expanded, whether its
//! content overflows the collapsed height, and the animation target height.
//! The rendering surface supplies measurements and transition notifications;
//! this module only derives state.

use std::collections::HashMap;

/// Content height in device-independent units (16 units per terminal row).
pub type Height = u32;

/// Max content height while collapsed.
pub const COLLAPSED_MAX_HEIGHT: Height = 224;

/// Slack added to the threshold so rounding never reports spurious overflow.
pub const OVERFLOW_TOLERANCE: Height = 4;

/// The animation target once a panel has been expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightTarget {
    /// Animate toward a measured full content height.
    Fixed(Height),
    /// Transition settled; the content renders unclamped.
    Natural,
}

/// Effective max-height the rendering surface should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxHeight {
    /// Clip content beyond this height.
    Clamped(Height),
    /// No clipping.
    Unbounded,
}

/// Style property a finished transition animated.
///
/// Only `MaxHeight` transitions settle the expand target; anything else is
/// noise from unrelated animations and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    MaxHeight,
    Accent,
}

/// Per-entry expansion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionState {
    /// User intent: has this panel been expanded.
    pub expanded: bool,
    /// Measured: does the natural content height exceed the collapsed threshold.
    pub overflowing: bool,
    /// Animation target. Only meaningful while `expanded` is true.
    pub target: Option<HeightTarget>,
}

/// Expansion state for a set of panels, keyed by entry identifier.
#[derive(Debug, Default)]
pub struct PanelController {
    states: HashMap<String, ExpansionState>,
}

impl PanelController {
    /// Create a controller with no panels measured yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state for an entry, if it has been measured or expanded.
    pub fn state(&self, id: &str) -> Option<&ExpansionState> {
        self.states.get(id)
    }

    /// Record whether an entry's content overflows the collapsed height.
    ///
    /// `natural_height` is the unclamped laid-out content height and must be
    /// measured after layout. Call again whenever layout changes (width
    /// change, late-loading content); the stored flag is replaced. Zero
    /// height never overflows.
    pub fn measure_overflow(&mut self, id: impl Into<String>, natural_height: Height) -> bool {
        let overflowing = natural_height > COLLAPSED_MAX_HEIGHT + OVERFLOW_TOLERANCE;
        self.states.entry(id.into()).or_default().overflowing = overflowing;
        overflowing
    }

    /// Expand an entry, targeting its current natural height.
    ///
    /// Sets `expanded` and the fixed target together so the transition
    /// animates from the collapsed height to the true full height instead of
    /// snapping. Expansion is one-way; there is no collapse.
    pub fn expand(&mut self, id: impl Into<String>, natural_height: Height) {
        let state = self.states.entry(id.into()).or_default();
        state.expanded = true;
        state.target = Some(HeightTarget::Fixed(natural_height));
    }

    /// Handle a completed transition reported by the rendering surface.
    ///
    /// A `MaxHeight` transition on an expanded panel settles the target to
    /// `Natural`, so content that later grows (a late image, a reflow) is not
    /// clipped. Transitions for other properties, or any notification while
    /// the panel is collapsed, change nothing.
    pub fn transition_settled(&mut self, id: &str, property: TransitionProperty) {
        if property != TransitionProperty::MaxHeight {
            return;
        }
        if let Some(state) = self.states.get_mut(id) {
            if state.expanded {
                state.target = Some(HeightTarget::Natural);
            }
        }
    }

    /// Effective max-height for rendering.
    ///
    /// Collapsed panels clamp to the threshold. Expanded panels clamp to the
    /// fixed target while the transition runs, then render unbounded once it
    /// settles.
    pub fn max_height(&self, id: &str) -> MaxHeight {
        match self.states.get(id) {
            Some(state) if state.expanded => match state.target {
                Some(HeightTarget::Fixed(h)) => MaxHeight::Clamped(h),
                Some(HeightTarget::Natural) | None => MaxHeight::Unbounded,
            },
            _ => MaxHeight::Clamped(COLLAPSED_MAX_HEIGHT),
        }
    }

    /// Whether an entry has been expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.states.get(id).is_some_and(|s| s.expanded)
    }

    /// Whether an entry's content overflows the collapsed height.
    pub fn is_overflowing(&self, id: &str) -> bool {
        self.states.get(id).is_some_and(|s| s.overflowing)
    }

    /// Whether the "See more" affordance should render for an entry.
    ///
    /// Only overflowing, still-collapsed panels show it.
    pub fn shows_expand_hint(&self, id: &str) -> bool {
        self.states
            .get(id)
            .is_some_and(|s| s.overflowing && !s.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_below_threshold() {
        let mut panels = PanelController::new();
        assert!(!panels.measure_overflow("a", 100));
        assert!(!panels.is_overflowing("a"));
    }

    #[test]
    fn test_measure_above_threshold() {
        let mut panels = PanelController::new();
        assert!(panels.measure_overflow("a", 500));
        assert!(panels.is_overflowing("a"));
    }

    #[test]
    fn test_measure_tolerance_boundary() {
        let mut panels = PanelController::new();
        // Exactly threshold + tolerance is still within bounds
        assert!(!panels.measure_overflow("a", COLLAPSED_MAX_HEIGHT + OVERFLOW_TOLERANCE));
        // One unit past the tolerance overflows
        assert!(panels.measure_overflow("a", COLLAPSED_MAX_HEIGHT + OVERFLOW_TOLERANCE + 1));
    }

    #[test]
    fn test_measure_zero_content() {
        let mut panels = PanelController::new();
        assert!(!panels.measure_overflow("empty", 0));
        assert!(!panels.shows_expand_hint("empty"));
    }

    #[test]
    fn test_remeasure_updates_both_ways() {
        let mut panels = PanelController::new();
        panels.measure_overflow("a", 500);
        assert!(panels.is_overflowing("a"));

        // Wider layout shrinks the wrapped height below the threshold
        panels.measure_overflow("a", 200);
        assert!(!panels.is_overflowing("a"));

        panels.measure_overflow("a", 300);
        assert!(panels.is_overflowing("a"));
    }

    #[test]
    fn test_expand_sets_target_and_flag_together() {
        let mut panels = PanelController::new();
        panels.measure_overflow("a", 500);
        panels.expand("a", 500);

        let state = panels.state("a").unwrap();
        assert!(state.expanded);
        assert_eq!(state.target, Some(HeightTarget::Fixed(500)));
    }

    #[test]
    fn test_settle_moves_target_to_natural() {
        let mut panels = PanelController::new();
        panels.expand("a", 500);

        panels.transition_settled("a", TransitionProperty::MaxHeight);
        assert_eq!(
            panels.state("a").unwrap().target,
            Some(HeightTarget::Natural)
        );
        assert!(panels.is_expanded("a"));
    }

    #[test]
    fn test_settle_ignores_other_properties() {
        let mut panels = PanelController::new();
        panels.expand("a", 500);

        panels.transition_settled("a", TransitionProperty::Accent);
        assert_eq!(
            panels.state("a").unwrap().target,
            Some(HeightTarget::Fixed(500))
        );
    }

    #[test]
    fn test_settle_ignored_while_collapsed() {
        let mut panels = PanelController::new();
        panels.measure_overflow("a", 500);

        panels.transition_settled("a", TransitionProperty::MaxHeight);
        let state = panels.state("a").unwrap();
        assert!(!state.expanded);
        assert_eq!(state.target, None);
    }

    #[test]
    fn test_settle_unknown_entry_is_noop() {
        let mut panels = PanelController::new();
        panels.transition_settled("ghost", TransitionProperty::MaxHeight);
        assert!(panels.state("ghost").is_none());
    }

    #[test]
    fn test_max_height_render_rule() {
        let mut panels = PanelController::new();

        // Unmeasured entries render collapsed
        assert_eq!(
            panels.max_height("a"),
            MaxHeight::Clamped(COLLAPSED_MAX_HEIGHT)
        );

        panels.measure_overflow("a", 500);
        assert_eq!(
            panels.max_height("a"),
            MaxHeight::Clamped(COLLAPSED_MAX_HEIGHT)
        );

        panels.expand("a", 500);
        assert_eq!(panels.max_height("a"), MaxHeight::Clamped(500));

        panels.transition_settled("a", TransitionProperty::MaxHeight);
        assert_eq!(panels.max_height("a"), MaxHeight::Unbounded);
    }

    #[test]
    fn test_hint_requires_overflow() {
        let mut panels = PanelController::new();
        panels.measure_overflow("short", 100);

        // Never shown without overflow, expanded or not
        assert!(!panels.shows_expand_hint("short"));
        panels.expand("short", 100);
        assert!(!panels.shows_expand_hint("short"));
    }

    #[test]
    fn test_hint_cleared_by_expand() {
        let mut panels = PanelController::new();
        panels.measure_overflow("a", 500);
        assert!(panels.shows_expand_hint("a"));

        panels.expand("a", 500);
        assert!(!panels.shows_expand_hint("a"));
    }

    #[test]
    fn test_expand_scenario_full_walk() {
        // Natural height 500 against the 224 threshold, per the original page
        let mut panels = PanelController::new();
        assert!(panels.measure_overflow("entry", 500));
        assert!(panels.shows_expand_hint("entry"));

        panels.expand("entry", 500);
        assert_eq!(panels.max_height("entry"), MaxHeight::Clamped(500));

        panels.transition_settled("entry", TransitionProperty::MaxHeight);
        assert_eq!(panels.max_height("entry"), MaxHeight::Unbounded);
        assert!(!panels.shows_expand_hint("entry"));
    }

    #[test]
    fn test_panels_are_independent() {
        let mut panels = PanelController::new();
        panels.measure_overflow("a", 500);
        panels.measure_overflow("b", 400);

        panels.expand("a", 500);
        assert!(panels.is_expanded("a"));
        assert!(!panels.is_expanded("b"));
        assert!(panels.shows_expand_hint("b"));
    }
}

//! Visibility Policy
//!
//! Derives what the header and the panel should show from the current
//! [`ExpansionState`]. The derivation is a pure function over the state
//! snapshot: no hidden ordering, so it is idempotent and can be re-run
//! any number of times with the same result.
//!
//! The coordinator applies the directive after every flag or fraction
//! change and after every animation completion.

use crate::state::ExpansionState;

/// What the header and panel should show for a given state snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityDirective {
    /// Whether the header view is visible at all
    pub header_visible: bool,
    /// Whether the header presents its expanded layout
    pub header_expanded: bool,
    /// Whether the panel view is visible at all
    pub panel_visible: bool,
}

impl VisibilityDirective {
    /// Derive the directive from a state snapshot.
    ///
    /// An in-flight header animation overrides the other flags for
    /// header visibility: the header never disappears mid-slide.
    #[must_use]
    pub fn derive(state: &ExpansionState) -> Self {
        let expanded = state.expanded();
        let animating = state.header_animating();
        let locked = state.locked();
        let overscrolling = state.overscrolling();

        Self {
            header_visible: expanded || !locked || animating,
            header_expanded: (locked && !animating) || (expanded && !overscrolling),
            panel_visible: expanded || overscrolling || animating,
        }
    }
}

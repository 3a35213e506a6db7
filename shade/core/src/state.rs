//! Expansion State
//!
//! Holds the shade's expansion flags and the current drag progress.
//! This is pure storage plus queries: the state is mutated only through
//! the coordinator's setters, never by the visibility or height logic
//! that reads it.
//!
//! There is no reset. The state lives exactly as long as the surface it
//! describes; a new surface gets a fresh state.

/// The shade's expansion flags and drag progress.
///
/// `header_animating` strictly brackets the interval between a slide
/// request being issued and its completion (or cancellation) firing.
/// While it is set, the header stays visible regardless of the other
/// flags.
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
    /// Whether the shade is expanded
    expanded: bool,
    /// Whether a header slide animation is in flight
    header_animating: bool,
    /// Whether the shade sits behind a lock surface
    locked: bool,
    /// Whether the scroller beneath the shade is being over-dragged
    overscrolling: bool,
    /// Drag progress, 0.0 (collapsed) to 1.0 (fully open)
    expansion_fraction: f32,
    /// Vertical header offset supplied alongside the fraction
    header_translation: f32,
}

impl ExpansionState {
    /// Create a fresh state for a new surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the shade is expanded
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Whether a header slide animation is in flight
    #[must_use]
    pub fn header_animating(&self) -> bool {
        self.header_animating
    }

    /// Whether the shade sits behind a lock surface
    #[must_use]
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Whether the underlying scroller is overscrolling
    #[must_use]
    pub fn overscrolling(&self) -> bool {
        self.overscrolling
    }

    /// Current drag progress (0.0 to 1.0)
    #[must_use]
    pub fn expansion_fraction(&self) -> f32 {
        self.expansion_fraction
    }

    /// Header offset recorded with the last fraction update
    #[must_use]
    pub fn header_translation(&self) -> f32 {
        self.header_translation
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub(crate) fn set_header_animating(&mut self, animating: bool) {
        self.header_animating = animating;
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub(crate) fn set_overscrolling(&mut self, overscrolling: bool) {
        self.overscrolling = overscrolling;
    }

    pub(crate) fn set_expansion(&mut self, fraction: f32, header_translation: f32) {
        self.expansion_fraction = fraction;
        self.header_translation = header_translation;
    }
}

/// Clip rectangle applied to the panel so it doesn't run over the header.
///
/// Recomputed on every fraction change, never persisted across calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClipBounds {
    /// Left edge (always 0 for the shade)
    pub left: i32,
    /// Top edge, lowered as the shade opens
    pub top: i32,
    /// Right edge (the panel's full width)
    pub right: i32,
    /// Bottom edge (the panel's full height)
    pub bottom: i32,
}

impl ClipBounds {
    /// Compute the clip rect for a given drag progress.
    ///
    /// The rect spans the panel's full width, its top edge sitting at
    /// `panel_height * (1 - fraction)` so the visible strip grows as the
    /// shade opens.
    #[must_use]
    pub fn for_expansion(fraction: f32, panel_width: i32, panel_height: i32) -> Self {
        Self {
            left: 0,
            top: (panel_height as f32 * (1.0 - fraction)) as i32,
            right: panel_width,
            bottom: panel_height,
        }
    }
}

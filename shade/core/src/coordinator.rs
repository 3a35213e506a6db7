//! Shade Coordinator
//!
//! The facade that ties the expansion state, the visibility policy, and
//! the slide machine to the surrounding views. External events (drag
//! progress, lock changes, overscroll, host commands) come in through
//! the setters; each one mutates the state and synchronously re-applies
//! the visibility policy. The two `animate_*` entry points complete
//! asynchronously through the host-driven [`ShadeCoordinator::on_frame`]
//! and [`ShadeCoordinator::on_animation_end`] continuations.
//!
//! # Design Philosophy
//!
//! The coordinator is UI-framework agnostic. It never renders or
//! measures anything; it drives the collaborator traits in
//! [`crate::views`] and reads back the heights they expose. Everything
//! runs on one logical UI thread: there is no concurrent mutation, only
//! asynchronous continuation, so no locks appear anywhere.
//!
//! The coordinator cannot be constructed without its collaborator views
//! ([`ShadeViews`] bundles them), so positioning calls always have a
//! backing surface; the "positioning before the view exists" hazard is
//! ruled out structurally rather than checked at runtime.

use std::time::Duration;

use crate::animation::{AnimationId, SlideAnimator, SlidePhase};
use crate::config::ShadeConfig;
use crate::height;
use crate::state::{ClipBounds, ExpansionState};
use crate::views::ShadeViews;
use crate::visibility::VisibilityDirective;

/// Coordinates expansion, visibility, and the header slide cycle for
/// one shade surface.
pub struct ShadeCoordinator {
    /// Expansion flags and drag progress
    state: ExpansionState,
    /// Whether live content updates are enabled for the shade
    listening: bool,
    /// The header slide state machine
    animator: SlideAnimator,
    /// Collaborator views
    views: ShadeViews,
}

impl ShadeCoordinator {
    /// Create a coordinator for a fresh surface.
    ///
    /// `engine` runs the vertical slide transitions; completions are
    /// reported back through [`ShadeCoordinator::on_animation_end`].
    pub fn new(
        views: ShadeViews,
        engine: Box<dyn crate::animation::AnimationEngine>,
        config: ShadeConfig,
    ) -> Self {
        Self {
            state: ExpansionState::new(),
            listening: false,
            animator: SlideAnimator::new(engine, config.timings),
            views,
        }
    }

    /// Snapshot of the expansion state
    #[must_use]
    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Which leg of the slide cycle is in flight
    #[must_use]
    pub fn slide_phase(&self) -> SlidePhase {
        self.animator.phase()
    }

    /// Set whether the shade is expanded
    pub fn set_expanded(&mut self, expanded: bool) {
        tracing::debug!(expanded, "Set expanded");
        self.state.set_expanded(expanded);
        self.views.panel.set_listening(self.listening && expanded);
        self.apply_visibility();
    }

    /// Set whether the shade sits behind the lock surface
    pub fn set_locked(&mut self, locked: bool) {
        tracing::debug!(locked, "Set locked");
        self.state.set_locked(locked);
        self.apply_visibility();
    }

    /// Set whether the scroller beneath the shade is overscrolling
    pub fn set_overscrolling(&mut self, overscrolling: bool) {
        tracing::debug!(overscrolling, "Set overscrolling");
        self.state.set_overscrolling(overscrolling);
        self.apply_visibility();
    }

    /// Toggle live content updates.
    ///
    /// The header always follows the flag; the panel only listens while
    /// it is also expanded.
    pub fn set_listening(&mut self, listening: bool) {
        tracing::debug!(listening, "Set listening");
        self.listening = listening;
        self.views.header.set_listening(listening);
        self.views
            .panel
            .set_listening(listening && self.state.expanded());
    }

    /// Toggle the header's live updates independently of the panel
    pub fn set_header_listening(&mut self, listening: bool) {
        self.views.header.set_listening(listening);
    }

    /// Apply a new drag progress and header offset.
    ///
    /// Positions the panel, clips it below the header, forwards the
    /// fraction to the container, and tells the detail overlay whether
    /// the shade is at exactly full expansion.
    #[allow(clippy::float_cmp)]
    pub fn set_expansion(&mut self, fraction: f32, header_translation: f32) {
        tracing::debug!(fraction, header_translation, "Set expansion");
        let locked = self.state.locked();

        self.views.container.set_expansion(fraction);

        let translation_scale = fraction - 1.0;
        if !self.state.header_animating() {
            // The slide machine owns the surface position while a slide
            // is in flight; drag positioning yields to it.
            let header_height = self.views.header.height() as f32;
            let y = if locked {
                translation_scale * header_height
            } else {
                header_translation
            };
            self.views.surface.set_translation_y(y);
        }

        // On the lock surface the header always reads fully expanded,
        // regardless of drag progress.
        self.views
            .header
            .set_expansion(if locked { 1.0 } else { fraction });

        let panel_height = self.views.panel.height();
        self.views
            .panel
            .set_translation_y(translation_scale * panel_height as f32);

        // Exact comparison: the overlay is fully expanded only at
        // exactly 1.0, not within some epsilon of it.
        self.views.detail.set_fully_expanded(fraction == 1.0);

        let bounds = ClipBounds::for_expansion(fraction, self.views.panel.width(), panel_height);
        self.views.panel.set_clip_bounds(bounds);

        self.state.set_expansion(fraction, header_translation);
        self.apply_visibility();
    }

    /// Slide the header in from behind the top edge after `delay`.
    ///
    /// No-op when the shade is already expanded: the header is visible,
    /// there is nothing to slide. The slide itself starts on the next
    /// frame tick, once the header's laid-out height is known.
    pub fn animate_header_sliding_in(&mut self, delay: Duration) {
        if self.state.expanded() {
            tracing::debug!("Header slide-in skipped, shade already expanded");
            return;
        }
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Animate header sliding in");
        self.state.set_header_animating(true);
        self.animator.request_slide_in(delay);
    }

    /// Slide the header out behind the top edge.
    ///
    /// Unconditional; supersedes any slide-in that is pending or
    /// running.
    pub fn animate_header_sliding_out(&mut self) {
        tracing::debug!("Animate header sliding out");
        self.state.set_header_animating(true);
        let hidden_y = -(self.views.header.height() as f32);
        self.animator.request_slide_out(hidden_y);
    }

    /// Frame boundary tick. Call once per frame before drawing.
    ///
    /// Consumes a pending slide-in: snaps the surface to its hidden
    /// position (the header height is laid out by now) and starts the
    /// transition back to zero. Idempotent when nothing is pending.
    pub fn on_frame(&mut self) {
        if self.animator.is_pending_slide_in() {
            let hidden_y = -(self.views.header.height() as f32);
            self.views.surface.set_translation_y(hidden_y);
            self.animator.start_pending();
        }
    }

    /// Completion report from the animation engine.
    ///
    /// Clears the animating flag and re-applies the visibility policy
    /// when the report matches the in-flight slide. Stale or duplicate
    /// reports change nothing.
    pub fn on_animation_end(&mut self, id: AnimationId) {
        if self.animator.finish(id) {
            self.state.set_header_animating(false);
            self.apply_visibility();
        }
    }

    /// Snap the surface out of sight with no transition.
    ///
    /// The escape hatch for teardown/detach. Cancels anything pending or
    /// running first, so no completion can fire later and clear the
    /// animating flag against a slide that no longer exists.
    pub fn hide_immediately(&mut self) {
        tracing::debug!("Hide immediately");
        if self.animator.cancel_in_flight() {
            self.state.set_header_animating(false);
            self.apply_visibility();
        }
        let hidden_y = -(self.views.header.height() as f32);
        self.views.surface.set_translation_y(hidden_y);
    }

    /// The height the surface wants to be right now
    #[must_use]
    pub fn desired_height(&self) -> i32 {
        height::desired_height(
            &*self.views.customizer,
            &*self.views.detail,
            &*self.views.panel,
            &*self.views.surface,
        )
    }

    /// The shade's minimum expansion height (the header's laid-out
    /// height)
    #[must_use]
    pub fn min_expansion_height(&self) -> i32 {
        self.views.header.height()
    }

    /// Override the surface's natural measured height on the container
    pub fn set_height_override(&mut self, height: i32) {
        self.views.container.set_height_override(height);
    }

    /// The customize state changed, so the shade's height changed.
    ///
    /// While customizing, the customizer owns the surface: panel and
    /// header are hidden underneath it.
    pub fn notify_customize_changed(&mut self) {
        tracing::debug!("Customize state changed");
        self.views.container.update_bottom();
        let customizing = self.views.customizer.is_customizing();
        self.views.panel.set_visible(!customizing);
        self.views.header.set_visible(!customizing);
        self.views.height_listener.on_shade_height_changed();
    }

    /// Close any open per-tile detail
    pub fn close_detail(&mut self) {
        self.views.panel.close_detail();
    }

    /// Whether the customizer owns the surface right now
    #[must_use]
    pub fn is_customizing(&self) -> bool {
        self.views.customizer.is_customizing()
    }

    /// Whether any secondary content sits over the panel
    #[must_use]
    pub fn is_showing_detail(&self) -> bool {
        self.views.customizer.is_customizing() || self.views.detail.is_showing_detail()
    }

    /// Re-derive the directive from the current state and push it to
    /// the views. Pure over the state snapshot, so safe to call any
    /// number of times.
    fn apply_visibility(&mut self) {
        let directive = VisibilityDirective::derive(&self.state);
        let expanded = self.state.expanded();

        self.views.panel.set_expanded(expanded);
        self.views.detail.set_expanded(expanded);
        self.views.header.set_visible(directive.header_visible);
        self.views.header.set_expanded(directive.header_expanded);
        self.views.panel.set_visible(directive.panel_visible);
    }
}

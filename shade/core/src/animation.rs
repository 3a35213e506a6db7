//! Header Slide Animation
//!
//! The slide machine drives the header's entrance (slide-in) and exit
//! (slide-out) along the vertical axis. It is an explicit state machine
//! rather than a pair of mutable listener fields, so the at-most-once
//! and cancellation guarantees hold structurally:
//!
//! ```text
//!                 request_slide_in          on_frame
//!      Idle ──────────────────────► PendingSlideIn ─────► SlideInRunning
//!       ▲                                                        │
//!       │                 completion (matching id)               │
//!       ├────────────────────────────────────────────────────────┤
//!       │                                                        │
//!       └──────────────────────── SlideOutRunning ◄──────────────┘
//!                                        ▲        request_slide_out
//!                                        └─ (from any state)
//! ```
//!
//! # Design
//!
//! The slide-in is two-phase: its start position depends on the header's
//! just-laid-out height, which is only known after the next layout pass.
//! The request therefore parks in `PendingSlideIn` until the host's next
//! frame tick consumes it. Consuming the variant is what makes the
//! continuation single-shot; a superseding request simply replaces it.
//!
//! Concurrent requests follow cancel-and-supersede: the newer request
//! cancels whatever is pending or running and takes over, since both
//! directions contend over the same vertical position property.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Standard slide-out duration in milliseconds
pub const SLIDE_OUT_DURATION_MS: u64 = 360;

/// Slide-in duration in milliseconds, used when the shade enters from
/// the top edge
pub const SLIDE_IN_DURATION_MS: u64 = 448;

/// Handle for an animation started on the engine.
///
/// Minted by the engine, echoed back by the host when the animation
/// completes. Stale handles (canceled or superseded animations) are
/// ignored by the slide machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Create a handle from the engine's own counter
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Easing curve tag handed to the engine.
///
/// The interpolation math itself belongs to the engine; the coordinator
/// only names the curve it wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Fast start, gentle settle; the standard shade transition curve
    #[default]
    FastOutSlowIn,
}

/// One-shot descriptor for a vertical slide of the surface.
///
/// Created per request, handed to the engine, and discarded. The engine
/// animates the surface's translation from its current position to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Target vertical position
    pub to: f32,
    /// Delay before the animation starts running
    pub start_delay: Duration,
    /// Duration of the transition itself
    pub duration: Duration,
    /// Easing curve to apply
    pub easing: Easing,
}

/// The animation engine contract.
///
/// `animate` starts a transition on the surface's vertical position and
/// returns a handle. The host reports completion back to the coordinator
/// exactly once per started animation, unless the animation is canceled,
/// in which case completion is never reported.
pub trait AnimationEngine {
    /// Start a transition and return its handle
    fn animate(&mut self, spec: AnimationSpec) -> AnimationId;
    /// Cancel a transition. Canceling an already-finished or unknown
    /// handle is a no-op.
    fn cancel(&mut self, id: AnimationId);
}

/// Timing configuration for the header slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationTimings {
    /// Slide-in duration in milliseconds
    #[serde(default = "default_slide_in_ms")]
    pub slide_in_ms: u64,
    /// Slide-out duration in milliseconds
    #[serde(default = "default_slide_out_ms")]
    pub slide_out_ms: u64,
    /// Easing curve for both slides
    #[serde(default)]
    pub easing: Easing,
}

fn default_slide_in_ms() -> u64 {
    SLIDE_IN_DURATION_MS
}

fn default_slide_out_ms() -> u64 {
    SLIDE_OUT_DURATION_MS
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            slide_in_ms: SLIDE_IN_DURATION_MS,
            slide_out_ms: SLIDE_OUT_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl AnimationTimings {
    /// Slide-in duration
    #[must_use]
    pub fn slide_in(&self) -> Duration {
        Duration::from_millis(self.slide_in_ms)
    }

    /// Slide-out duration
    #[must_use]
    pub fn slide_out(&self) -> Duration {
        Duration::from_millis(self.slide_out_ms)
    }
}

/// Which leg of the slide cycle the machine is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    /// Nothing in flight
    Idle,
    /// Slide-in requested, waiting for the next frame boundary
    PendingSlideIn,
    /// Slide-in transition running on the engine
    SlideInRunning,
    /// Slide-out transition running on the engine
    SlideOutRunning,
}

/// Internal machine state; running variants carry the engine handle so
/// completions can be matched and stale reports dropped.
#[derive(Clone, Copy, Debug)]
enum SlideState {
    Idle,
    PendingSlideIn { delay: Duration },
    SlideInRunning { id: AnimationId },
    SlideOutRunning { id: AnimationId },
}

/// The header slide state machine.
///
/// Owns the engine handle for the at-most-one in-flight transition.
/// The caller owns the `header_animating` flag: it sets the flag when
/// issuing a request and clears it when [`SlideAnimator::finish`] or
/// [`SlideAnimator::cancel_in_flight`] reports that the cycle ended.
pub struct SlideAnimator {
    state: SlideState,
    engine: Box<dyn AnimationEngine>,
    timings: AnimationTimings,
}

impl SlideAnimator {
    /// Create an idle machine driving the given engine
    pub fn new(engine: Box<dyn AnimationEngine>, timings: AnimationTimings) -> Self {
        Self {
            state: SlideState::Idle,
            engine,
            timings,
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        match self.state {
            SlideState::Idle => SlidePhase::Idle,
            SlideState::PendingSlideIn { .. } => SlidePhase::PendingSlideIn,
            SlideState::SlideInRunning { .. } => SlidePhase::SlideInRunning,
            SlideState::SlideOutRunning { .. } => SlidePhase::SlideOutRunning,
        }
    }

    /// Whether nothing is pending or running
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SlideState::Idle)
    }

    /// Whether a slide-in is parked waiting for the frame boundary
    #[must_use]
    pub fn is_pending_slide_in(&self) -> bool {
        matches!(self.state, SlideState::PendingSlideIn { .. })
    }

    /// Park a slide-in request until the next frame boundary.
    ///
    /// Supersedes anything pending or running: a running slide-out is
    /// canceled on the engine, an earlier pending slide-in is replaced.
    pub fn request_slide_in(&mut self, delay: Duration) {
        self.cancel_engine_transition();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Slide-in pending");
        self.state = SlideState::PendingSlideIn { delay };
    }

    /// Start a slide-out to `hidden_y` immediately, superseding anything
    /// pending or running.
    pub fn request_slide_out(&mut self, hidden_y: f32) {
        self.cancel_engine_transition();
        let id = self.engine.animate(AnimationSpec {
            to: hidden_y,
            start_delay: Duration::ZERO,
            duration: self.timings.slide_out(),
            easing: self.timings.easing,
        });
        tracing::debug!(id = id.value(), hidden_y, "Slide-out started");
        self.state = SlideState::SlideOutRunning { id };
    }

    /// Consume a pending slide-in at the frame boundary and start the
    /// transition to `y = 0`.
    ///
    /// The caller must have snapped the surface to its hidden position
    /// first. Returns the started animation's handle, or `None` when no
    /// slide-in was pending (the tick is then a no-op, so the host may
    /// call this every frame).
    pub fn start_pending(&mut self) -> Option<AnimationId> {
        let SlideState::PendingSlideIn { delay } = self.state else {
            return None;
        };
        let id = self.engine.animate(AnimationSpec {
            to: 0.0,
            start_delay: delay,
            duration: self.timings.slide_in(),
            easing: self.timings.easing,
        });
        tracing::debug!(id = id.value(), "Slide-in started");
        self.state = SlideState::SlideInRunning { id };
        Some(id)
    }

    /// Handle a completion report from the engine.
    ///
    /// Returns `true` when the report matches the in-flight transition
    /// and the machine returned to idle. Stale handles (canceled or
    /// superseded transitions) and duplicate reports return `false` and
    /// change nothing.
    pub fn finish(&mut self, id: AnimationId) -> bool {
        match self.state {
            SlideState::SlideInRunning { id: running } | SlideState::SlideOutRunning { id: running }
                if running == id =>
            {
                tracing::debug!(id = id.value(), "Slide finished");
                self.state = SlideState::Idle;
                true
            }
            _ => {
                tracing::trace!(id = id.value(), "Ignoring stale animation completion");
                false
            }
        }
    }

    /// Forcibly cancel whatever is pending or running.
    ///
    /// Returns `true` when a cycle was actually torn down, so the caller
    /// knows to clear its animating flag. Canceling from idle is a no-op.
    pub fn cancel_in_flight(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        self.cancel_engine_transition();
        self.state = SlideState::Idle;
        true
    }

    /// Cancel the engine-side transition, if one is running. A pending
    /// slide-in has nothing on the engine yet; dropping the variant is
    /// its cancellation.
    fn cancel_engine_transition(&mut self) {
        match self.state {
            SlideState::SlideInRunning { id } | SlideState::SlideOutRunning { id } => {
                tracing::debug!(id = id.value(), "Canceling in-flight slide");
                self.engine.cancel(id);
            }
            SlideState::Idle | SlideState::PendingSlideIn { .. } => {}
        }
    }
}

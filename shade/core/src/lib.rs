//! Shade Core - Expansion/Visibility Coordination for Quickshade
//!
//! This crate coordinates a collapsible panel surface (the "shade") that
//! sits above a scrollable content list. It tracks a small set of
//! expansion flags, derives what the header and panel should show from
//! them, and drives the header's slide-in/slide-out cycle, completely
//! independent of any UI framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Host UI                              │
//! │   drag progress · lock changes · overscroll · frame ticks    │
//! └──────────────────────────┬───────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┼───────────────────────────────────┐
//! │                  ShadeCoordinator                            │
//! │  ┌───────────────┐  ┌───────────────┐  ┌──────────────────┐  │
//! │  │ ExpansionState│─►│  Visibility   │  │  SlideAnimator   │  │
//! │  │   (flags +    │  │  Directive    │  │ (state machine + │  │
//! │  │   fraction)   │  │ (pure derive) │  │ AnimationEngine) │  │
//! │  └───────────────┘  └───────┬───────┘  └────────┬─────────┘  │
//! └─────────────────────────────┼───────────────────┼────────────┘
//!                               │                   │
//!                  panel · header · detail · customizer ·
//!                  container · surface · height listener
//!                        (collaborator traits)
//! ```
//!
//! Control flow: external events mutate [`state::ExpansionState`], the
//! [`visibility::VisibilityDirective`] is re-derived and applied
//! synchronously, and the [`animation::SlideAnimator`] handles discrete
//! show/hide transitions, mutating the state again asynchronously when
//! the engine reports completion.
//!
//! # Key Types
//!
//! - [`ShadeCoordinator`]: the facade the host drives
//! - [`ExpansionState`]: flags and drag progress
//! - [`VisibilityDirective`]: pure visibility derivation
//! - [`AnimationEngine`]: the contract the host's animator implements
//! - [`ShadeViews`]: the collaborator views bundled for construction
//! - [`ShadeConfig`]: slide timing configuration

pub mod animation;
pub mod config;
pub mod coordinator;
pub mod height;
pub mod state;
pub mod views;
pub mod visibility;

pub use animation::{
    AnimationEngine, AnimationId, AnimationSpec, AnimationTimings, Easing, SlidePhase,
};
pub use config::{ConfigError, ShadeConfig};
pub use coordinator::ShadeCoordinator;
pub use height::desired_height;
pub use state::{ClipBounds, ExpansionState};
pub use views::{
    ContainerHost, CustomizerView, DetailView, HeaderView, HeightListener, PanelView, ShadeViews,
    SurfaceView,
};
pub use visibility::VisibilityDirective;

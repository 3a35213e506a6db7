//! Desired Height
//!
//! Computes the height the shade surface wants to occupy. This differs
//! from the surface's measured height in one case: while the detail
//! overlay is closing, the pre-collapse panel height is reported so the
//! container never sees a late height drop mid-transition.
//!
//! The query is evaluated freshly on every call. The customizing and
//! closing-detail flags both change asynchronously from overlay
//! callbacks, so caching here would serve stale answers.

use crate::views::{CustomizerView, DetailView, PanelView, SurfaceView};

/// The height the shade surface wants to be.
///
/// Three-way branch:
/// - customizer active: the customizer owns the layout, report the
///   surface's current height verbatim;
/// - detail overlay closing: report the pre-collapse panel height
///   (top margin + measured panel height + bottom padding);
/// - otherwise: the surface's plain measured height.
#[must_use]
pub fn desired_height(
    customizer: &dyn CustomizerView,
    detail: &dyn DetailView,
    panel: &dyn PanelView,
    surface: &dyn SurfaceView,
) -> i32 {
    if customizer.is_customizing() {
        return surface.height();
    }
    if detail.is_closing_detail() {
        let panel_height = panel.top_margin() + panel.measured_height();
        panel_height + surface.padding_bottom()
    } else {
        surface.measured_height()
    }
}

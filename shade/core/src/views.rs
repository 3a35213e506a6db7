//! Collaborator Contracts
//!
//! The coordinator never renders, measures, or lays anything out itself.
//! It drives the surrounding views through these traits and reads back
//! the heights they measured. Implementations live with the host UI; the
//! coordinator only depends on the contracts.

use crate::state::ClipBounds;

/// The tile panel under the header.
pub trait PanelView {
    /// Tell the panel whether the shade is expanded
    fn set_expanded(&mut self, expanded: bool);
    /// Show or hide the panel
    fn set_visible(&mut self, visible: bool);
    /// Toggle whether the panel's live content subscribes to updates
    fn set_listening(&mut self, listening: bool);
    /// Vertical offset applied while the shade is dragged open
    fn set_translation_y(&mut self, y: f32);
    /// Clip the panel so it doesn't run over the header
    fn set_clip_bounds(&mut self, bounds: ClipBounds);
    /// Close any open per-tile detail
    fn close_detail(&mut self);
    /// Laid-out height
    fn height(&self) -> i32;
    /// Height from the last measure pass
    fn measured_height(&self) -> i32;
    /// Laid-out width
    fn width(&self) -> i32;
    /// Top margin from the panel's layout params
    fn top_margin(&self) -> i32;
}

/// The shade's header strip.
pub trait HeaderView {
    /// Show or hide the header
    fn set_visible(&mut self, visible: bool);
    /// Switch the header between its collapsed and expanded layout
    fn set_expanded(&mut self, expanded: bool);
    /// Drive the header's expansion progress (0.0 to 1.0)
    fn set_expansion(&mut self, fraction: f32);
    /// Toggle whether the header's status content subscribes to updates
    fn set_listening(&mut self, listening: bool);
    /// Laid-out height; doubles as the shade's minimum expansion height
    fn height(&self) -> i32;
}

/// The drill-down detail overlay shown over the panel.
pub trait DetailView {
    /// Tell the overlay whether the shade is expanded
    fn set_expanded(&mut self, expanded: bool);
    /// Tell the overlay the shade reached exactly full expansion
    fn set_fully_expanded(&mut self, fully_expanded: bool);
    /// Whether a detail is currently showing
    fn is_showing_detail(&self) -> bool;
    /// Whether the overlay is in its closing transition
    fn is_closing_detail(&self) -> bool;
}

/// The tile customizer overlay.
pub trait CustomizerView {
    /// Whether the customizer owns the surface's layout right now
    fn is_customizing(&self) -> bool;
}

/// The container hosting the whole shade surface.
pub trait ContainerHost {
    /// Forward the current expansion progress
    fn set_expansion(&mut self, fraction: f32);
    /// Override the surface's natural measured height
    fn set_height_override(&mut self, height: i32);
    /// Re-derive the container's bottom edge after a height change
    fn update_bottom(&mut self);
}

/// The backing view of the whole shade surface.
pub trait SurfaceView {
    /// Vertical position of the surface; negative values slide it off
    /// behind the top edge
    fn set_translation_y(&mut self, y: f32);
    /// Laid-out height
    fn height(&self) -> i32;
    /// Height from the last measure pass
    fn measured_height(&self) -> i32;
    /// Bottom padding of the surface view
    fn padding_bottom(&self) -> i32;
}

/// Owner of the shade, notified when its desired height changes.
pub trait HeightListener {
    /// The shade's desired height changed; re-query and re-layout
    fn on_shade_height_changed(&mut self);
}

/// The full set of collaborator views the coordinator drives.
///
/// Bundled so the coordinator cannot be constructed without a backing
/// surface: positioning calls always have a view to act on.
pub struct ShadeViews {
    pub panel: Box<dyn PanelView>,
    pub header: Box<dyn HeaderView>,
    pub detail: Box<dyn DetailView>,
    pub customizer: Box<dyn CustomizerView>,
    pub container: Box<dyn ContainerHost>,
    pub surface: Box<dyn SurfaceView>,
    pub height_listener: Box<dyn HeightListener>,
}

//! The engine-side view of an external plot.
//!
//! Plots are created elsewhere; the composition engine treats them as
//! opaque except for the geometry and metadata it needs: the full frame
//! and inner panel rectangles, axis-strip extents for alignment, the list
//! of guides, and the theme and tag slots it is allowed to overwrite.

use crate::geometry::Rect;
use crate::guide::GuideDescriptor;
use crate::theme::Theme;

/// Which region of a plot a measurement is taken against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RefRegion {
    /// The innermost data-drawing rectangle, excluding axes and titles.
    #[default]
    Panel,
    /// The entire plot including axes, titles, and legends.
    Full,
}

/// The role a leaf plays in a composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlotRole {
    /// An ordinary plot panel.
    #[default]
    Panel,
    /// A reserved, empty cell that receives collected guides.
    GuideSlot,
}

/// Extents of the axis-label strips along the panel's edges, in points.
///
/// Used for shared-axis alignment: siblings in a column align their left
/// strips to the widest one, siblings in a row align their bottom strips
/// to the tallest one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisExtents {
    left: f32,
    bottom: f32,
}

impl AxisExtents {
    /// Creates axis extents from the left strip width and bottom strip
    /// height.
    pub fn new(left: f32, bottom: f32) -> Self {
        Self { left, bottom }
    }

    /// Returns the width of the left axis strip.
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the height of the bottom axis strip.
    pub fn bottom(self) -> f32 {
        self.bottom
    }
}

/// One externally-created plot, as consumed by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    frame: Rect,
    panel: Rect,
    axis_extents: AxisExtents,
    guides: Vec<GuideDescriptor>,
    theme: Theme,
    tag: Option<String>,
    role: PlotRole,
}

impl Plot {
    /// Creates a plot from its full frame and inner panel rectangles,
    /// both in points.
    pub fn new(frame: Rect, panel: Rect) -> Self {
        Self {
            frame,
            panel,
            ..Self::default()
        }
    }

    /// Creates the reserved placeholder that receives collected guides.
    pub fn guide_slot() -> Self {
        Self {
            role: PlotRole::GuideSlot,
            ..Self::default()
        }
    }

    /// Sets the axis-strip extents.
    pub fn with_axis_extents(mut self, extents: AxisExtents) -> Self {
        self.axis_extents = extents;
        self
    }

    /// Adds a guide to the plot.
    pub fn with_guide(mut self, guide: GuideDescriptor) -> Self {
        self.guides.push(guide);
        self
    }

    /// Sets the plot's own theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the full plot rectangle.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the inner data-panel rectangle.
    pub fn panel(&self) -> Rect {
        self.panel
    }

    /// Returns the rectangle for the given reference region.
    pub fn region(&self, reference: RefRegion) -> Rect {
        match reference {
            RefRegion::Panel => self.panel,
            RefRegion::Full => self.frame,
        }
    }

    /// Returns the axis-strip extents.
    pub fn axis_extents(&self) -> AxisExtents {
        self.axis_extents
    }

    /// Returns the plot's guides.
    pub fn guides(&self) -> &[GuideDescriptor] {
        &self.guides
    }

    /// Removes and returns all guides, leaving the plot legend-free.
    pub fn take_guides(&mut self) -> Vec<GuideDescriptor> {
        std::mem::take(&mut self.guides)
    }

    /// Deposits guides onto the plot (used for guide slots).
    pub fn deposit_guides(&mut self, guides: Vec<GuideDescriptor>) {
        self.guides.extend(guides);
    }

    /// Returns the plot's theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns a mutable reference to the plot's theme.
    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    /// Returns the assigned tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Assigns or clears the tag.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// Returns the plot's role in the composition.
    pub fn role(&self) -> PlotRole {
        self.role
    }

    /// Returns true if this leaf is the reserved guide-collection cell.
    pub fn is_guide_slot(&self) -> bool {
        self.role == PlotRole::GuideSlot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::GuideEntry;

    fn sample_plot() -> Plot {
        Plot::new(
            Rect::new(0.0, 0.0, 200.0, 150.0),
            Rect::new(30.0, 25.0, 190.0, 140.0),
        )
    }

    #[test]
    fn test_region_selection() {
        let plot = sample_plot();
        assert_eq!(plot.region(RefRegion::Full), plot.frame());
        assert_eq!(plot.region(RefRegion::Panel), plot.panel());
        assert!(plot.frame().contains(plot.panel()));
    }

    #[test]
    fn test_take_guides_drains() {
        let mut plot = sample_plot().with_guide(GuideDescriptor::new(
            "Species",
            vec![GuideEntry::new("swatch:red", "setosa")],
        ));

        let taken = plot.take_guides();
        assert_eq!(taken.len(), 1);
        assert!(plot.guides().is_empty());
        assert!(plot.take_guides().is_empty());
    }

    #[test]
    fn test_guide_slot_role() {
        assert!(Plot::guide_slot().is_guide_slot());
        assert!(!sample_plot().is_guide_slot());
    }

    #[test]
    fn test_tag_slot() {
        let mut plot = sample_plot();
        assert_eq!(plot.tag(), None);
        plot.set_tag(Some("a".to_string()));
        assert_eq!(plot.tag(), Some("a"));
    }
}

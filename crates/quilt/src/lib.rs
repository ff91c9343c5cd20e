//! Quilt - an engine for arranging independent plots into composite layouts.
//!
//! Plots are created elsewhere; quilt assembles them: grids and nested
//! splits, shared legends, inset overlays, broadcast themes, and
//! auto-tag labelling. The engine is pure in-memory computation — it
//! produces a [`RenderPlan`] of normalized rectangles and resolved
//! metadata, and hands actual pixel rendering back to the plot
//! collaborator.

pub mod annotate;
pub mod config;
pub mod guides;
pub mod inset;
pub mod layout;
pub mod structure;

mod error;

pub use quilt_core::{color, geometry, guide, length, plot, tag, theme};
pub use quilt_parser::{Design, DesignError, parse as parse_design};

pub use error::ComposeError;

use log::{debug, info};

use quilt_core::plot::PlotRole;
use quilt_core::theme::Theme;

use annotate::Annotation;
use config::ComposeConfig;
use geometry::Rect;
use guides::{CollectedGuides, GuideMode};
use layout::LayoutTree;
use structure::Node;

/// A composition: the assembled tree plus its root-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    root: Node,
    annotation: Annotation,
    guide_mode: GuideMode,
}

impl Composition {
    /// Wraps an assembled tree with empty annotation and guides kept
    /// per plot.
    pub fn new(root: Node) -> Self {
        Self {
            root,
            annotation: Annotation::new(),
            guide_mode: GuideMode::default(),
        }
    }

    /// Attaches root-level annotation (titles, caption, theme, tag
    /// levels).
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    /// Sets the guide handling mode.
    pub fn with_guide_mode(mut self, mode: GuideMode) -> Self {
        self.guide_mode = mode;
        self
    }

    /// Returns the composition tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the composition tree mutably, for indexed replacement and
    /// theme broadcasts.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Returns the root-level annotation.
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Returns the guide handling mode.
    pub fn guide_mode(&self) -> GuideMode {
        self.guide_mode
    }
}

impl From<Node> for Composition {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

/// One leaf's entry in the render plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    leaf: usize,
    rect: Rect,
    tag: Option<String>,
    theme: Theme,
    role: PlotRole,
}

impl PanelPlan {
    /// Returns the leaf's depth-first index into
    /// [`Node::plots`](structure::Node::plots).
    pub fn leaf(&self) -> usize {
        self.leaf
    }

    /// Returns the leaf's rectangle, normalized to the full figure.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the assigned tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the leaf's theme, resolved against the ambient theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns true if this entry is the reserved guide area.
    pub fn is_guide_slot(&self) -> bool {
        self.role == PlotRole::GuideSlot
    }
}

/// The formatted title block attached to the figure root.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBlock {
    title: Option<String>,
    subtitle: Option<String>,
    caption: Option<String>,
    theme: Theme,
}

impl TitleBlock {
    /// Returns the title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the subtitle, if set.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the caption, if set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Returns the theme the block is formatted with: the annotation
    /// theme resolved against the ambient theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

/// The engine's final output, handed back to the plot collaborator for
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    panels: Vec<PanelPlan>,
    guides: CollectedGuides,
    titles: TitleBlock,
    layout: LayoutTree,
}

impl RenderPlan {
    /// Returns one entry per leaf, in depth-first leaf order.
    pub fn panels(&self) -> &[PanelPlan] {
        &self.panels
    }

    /// Returns the guide collection result.
    pub fn guides(&self) -> &CollectedGuides {
        &self.guides
    }

    /// Returns the formatted title block.
    pub fn titles(&self) -> &TitleBlock {
        &self.titles
    }

    /// Returns the solved layout tree, including shared-axis alignment
    /// hints.
    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }
}

/// Builder for solving compositions into render plans.
///
/// # Examples
///
/// ```
/// use quilt::{Composer, Composition};
/// use quilt::config::ComposeConfig;
/// use quilt::geometry::Rect;
/// use quilt::plot::Plot;
/// use quilt::structure::Node;
///
/// let plot = || {
///     Plot::new(
///         Rect::new(0.0, 0.0, 100.0, 100.0),
///         Rect::new(10.0, 10.0, 90.0, 90.0),
///     )
/// };
///
/// let tree = Node::leaf(plot()).combine(Node::leaf(plot()));
/// let mut composition = Composition::new(tree);
///
/// let composer = Composer::new(ComposeConfig::default());
/// let plan = composer.compose(&mut composition).expect("solvable layout");
/// assert_eq!(plan.panels().len(), 2);
/// ```
#[derive(Default)]
pub struct Composer {
    config: ComposeConfig,
}

impl Composer {
    /// Creates a new composer with the given configuration.
    pub fn new(config: ComposeConfig) -> Self {
        Self { config }
    }

    /// Returns the composer's configuration.
    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Solves a composition into a [`RenderPlan`].
    ///
    /// Runs the render-time passes in order: tag assignment, guide
    /// collection, layout solving, and theme resolution against the
    /// ambient theme. The tree's theme, tag, and guide fields are
    /// mutated in place; everything else the plan reports is computed
    /// fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Config`] for invalid configured colors,
    /// [`ComposeError::Construction`] for structurally unsolvable trees,
    /// and [`ComposeError::DegenerateBounds`] for degenerate inset
    /// boxes.
    pub fn compose(&self, composition: &mut Composition) -> Result<RenderPlan, ComposeError> {
        info!("Composing figure");

        let ambient = self
            .config
            .style()
            .ambient_theme()
            .map_err(ComposeError::Config)?;

        composition
            .annotation
            .apply_tags(&mut composition.root);

        let position = ambient.legend_position().unwrap_or_default();
        let collected = guides::collect(&mut composition.root, composition.guide_mode, position);

        let layout = layout::solve(&composition.root, &self.config)?;
        let placements = layout.placements();

        let plots = composition.root.plots();
        let panels = placements
            .iter()
            .map(|placement| {
                let plot = plots[placement.leaf()];
                PanelPlan {
                    leaf: placement.leaf(),
                    rect: placement.rect(),
                    tag: plot.tag().map(String::from),
                    theme: plot.theme().resolve(&ambient),
                    role: plot.role(),
                }
            })
            .collect();

        let annotation = &composition.annotation;
        let titles = TitleBlock {
            title: annotation.title().map(String::from),
            subtitle: annotation.subtitle().map(String::from),
            caption: annotation.caption().map(String::from),
            theme: annotation
                .theme()
                .cloned()
                .unwrap_or_default()
                .resolve(&ambient),
        };

        debug!(
            panels = plots.len(), guides = collected.guides().len();
            "Composition solved"
        );

        Ok(RenderPlan {
            panels,
            guides: collected,
            titles,
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::guide::{GuideDescriptor, GuideEntry};
    use quilt_core::tag::TagStyle;
    use quilt_core::theme::LegendPosition;

    fn plot() -> plot::Plot {
        plot::Plot::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(10.0, 10.0, 90.0, 90.0),
        )
    }

    #[test]
    fn test_compose_assigns_tags_and_rects() {
        let tree = Node::leaf(plot()).combine(Node::leaf(plot()));
        let mut composition = Composition::new(tree).with_annotation(
            Annotation::new()
                .with_title("Figure 1")
                .with_tag_levels(vec![TagStyle::LatinLower]),
        );

        let plan = Composer::default().compose(&mut composition).unwrap();

        assert_eq!(plan.titles().title(), Some("Figure 1"));
        assert_eq!(plan.panels().len(), 2);
        assert_eq!(plan.panels()[0].tag(), Some("a"));
        assert_eq!(plan.panels()[1].tag(), Some("b"));
        assert_eq!(plan.panels()[0].rect(), Rect::new(0.0, 0.0, 0.5, 1.0));
        assert_eq!(plan.panels()[1].rect(), Rect::new(0.5, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_compose_collects_guides_at_ambient_position() {
        let guide = GuideDescriptor::new("Species", vec![GuideEntry::new("swatch", "setosa")]);
        let tree = Node::leaf(plot().with_guide(guide.clone()))
            .combine(Node::leaf(plot().with_guide(guide)));
        let mut composition = Composition::new(tree).with_guide_mode(GuideMode::Collect);

        let plan = Composer::default().compose(&mut composition).unwrap();

        assert_eq!(plan.guides().guides().len(), 1);
        assert_eq!(
            plan.guides().placement(),
            guides::GuidePlacement::Legend(LegendPosition::Right)
        );
    }

    #[test]
    fn test_compose_resolves_themes_against_ambient() {
        let config: ComposeConfig =
            serde_json::from_str(r#"{"style": {"font_family": "Helvetica"}}"#).unwrap();
        let tree = Node::leaf(plot().with_theme(Theme::new().with_font_size(9)))
            .combine(Node::leaf(plot()));
        let mut composition = Composition::new(tree);

        let plan = Composer::new(config).compose(&mut composition).unwrap();

        // Explicit local size survives; ambient family fills everywhere.
        assert_eq!(plan.panels()[0].theme().font_size(), Some(9));
        assert_eq!(plan.panels()[0].theme().font_family(), Some("Helvetica"));
        assert_eq!(plan.panels()[1].theme().font_family(), Some("Helvetica"));
    }

    #[test]
    fn test_compose_is_repeatable() {
        let tree = Node::leaf(plot()).combine(Node::leaf(plot()));
        let mut composition = Composition::new(tree).with_annotation(
            Annotation::new().with_tag_levels(vec![TagStyle::Arabic]),
        );

        let composer = Composer::default();
        let first = composer.compose(&mut composition).unwrap();
        let second = composer.compose(&mut composition).unwrap();
        assert_eq!(first, second);
    }
}

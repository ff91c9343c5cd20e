//! The recursive layout solver.
//!
//! Each composite node solves its children independently, then assigns
//! every child a normalized cell rectangle in its own [0,1]×[0,1] space.
//! Absolute figure coordinates only appear when the solved tree is
//! flattened through [`LayoutTree::placements`].

use log::{debug, trace};

use quilt_core::geometry::Rect;
use quilt_core::plot::{AxisExtents, PlotRole, RefRegion};

use crate::config::ComposeConfig;
use crate::error::ComposeError;
use crate::layout::grid::{CellGrid, auto_shape};
use crate::structure::{GridSpec, Node};

/// Shared-axis alignment hints for one solved grid.
///
/// Axis strips of equal rank align to the widest or tallest sibling: every
/// plot in a column reserves `col_axis_widths[col]` for its left strip,
/// every plot in a row reserves `row_axis_heights[row]` for its bottom
/// strip. A spanning cell contributes to its leftmost column and
/// bottommost row, where its strips actually sit.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignment {
    col_axis_widths: Vec<f32>,
    row_axis_heights: Vec<f32>,
}

impl AxisAlignment {
    /// Returns the per-column maximum left-strip widths, in points.
    pub fn col_axis_widths(&self) -> &[f32] {
        &self.col_axis_widths
    }

    /// Returns the per-row maximum bottom-strip heights, in points.
    /// Rows count from the top.
    pub fn row_axis_heights(&self) -> &[f32] {
        &self.row_axis_heights
    }
}

/// What occupies a solved rectangle.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutContent {
    /// A single leaf plot, identified by its depth-first index.
    Panel {
        /// Depth-first index of the leaf across the whole solved tree.
        leaf: usize,
    },
    /// A solved grid of children.
    Group {
        /// The children, each with a parent-relative rect.
        children: Vec<LayoutTree>,
        /// Shared-axis alignment hints for this grid.
        alignment: AxisAlignment,
    },
    /// A host with an inset overlay on top of it.
    Overlay {
        /// The host subtree, filling the node's rect.
        host: Box<LayoutTree>,
        /// The overlay subtree; its rect is the resolved inset box,
        /// normalized against the host's full frame.
        overlay: Box<LayoutTree>,
    },
}

/// A solved subtree: a normalized parent-relative rectangle plus its
/// content.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    rect: Rect,
    content: LayoutContent,
}

impl LayoutTree {
    /// Returns the normalized parent-relative rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns what occupies the rectangle.
    pub fn content(&self) -> &LayoutContent {
        &self.content
    }

    /// Flattens the solved tree into per-leaf rectangles normalized to
    /// the full figure, in depth-first leaf order.
    pub fn placements(&self) -> Vec<PanelPlacement> {
        let mut out = Vec::new();
        self.collect_placements(Rect::unit(), &mut out);
        out.sort_by_key(|placement| placement.leaf);
        out
    }

    fn collect_placements(&self, parent: Rect, out: &mut Vec<PanelPlacement>) {
        let absolute = self.rect.denormalize(parent);
        match &self.content {
            LayoutContent::Panel { leaf } => out.push(PanelPlacement {
                leaf: *leaf,
                rect: absolute,
            }),
            LayoutContent::Group { children, .. } => {
                for child in children {
                    child.collect_placements(absolute, out);
                }
            }
            LayoutContent::Overlay { host, overlay } => {
                host.collect_placements(absolute, out);
                overlay.collect_placements(absolute, out);
            }
        }
    }
}

/// One leaf's place in the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    leaf: usize,
    rect: Rect,
}

impl PanelPlacement {
    /// Returns the leaf's depth-first index.
    pub fn leaf(self) -> usize {
        self.leaf
    }

    /// Returns the leaf's rectangle, normalized to the full figure.
    pub fn rect(self) -> Rect {
        self.rect
    }
}

/// Solves a composition tree into normalized cell rectangles.
///
/// # Errors
///
/// Returns [`ComposeError::Construction`] for an empty composite, a
/// design whose region count does not match the child count, or grid
/// constraints with too little capacity, and
/// [`ComposeError::DegenerateBounds`] for an inset box that degenerates
/// on resolution.
pub fn solve(node: &Node, config: &ComposeConfig) -> Result<LayoutTree, ComposeError> {
    let mut next_leaf = 0;
    let tree = solve_node(node, config.layout().panel_spacing(), &mut next_leaf)?;
    debug!(leaves = next_leaf; "Solved composition layout");
    Ok(tree)
}

fn solve_node(
    node: &Node,
    spacing: f32,
    next_leaf: &mut usize,
) -> Result<LayoutTree, ComposeError> {
    match node {
        Node::Leaf(_) => {
            let leaf = *next_leaf;
            *next_leaf += 1;
            Ok(LayoutTree {
                rect: Rect::unit(),
                content: LayoutContent::Panel { leaf },
            })
        }
        Node::Inset {
            host,
            overlay,
            bounds,
            align_to,
        } => {
            let host_tree = solve_node(host, spacing, next_leaf)?;

            let reference = host_region(host, *align_to)?;
            let frame = host_region(host, RefRegion::Full)?;
            let resolved = bounds.resolve(reference)?;
            trace!(
                left = resolved.left(), bottom = resolved.bottom(),
                right = resolved.right(), top = resolved.top();
                "Resolved inset box"
            );

            let mut overlay_tree = solve_node(overlay, spacing, next_leaf)?;
            overlay_tree.rect = resolved.relative_to(frame);

            Ok(LayoutTree {
                rect: Rect::unit(),
                content: LayoutContent::Overlay {
                    host: Box::new(host_tree),
                    overlay: Box::new(overlay_tree),
                },
            })
        }
        composite => solve_composite(composite, spacing, next_leaf),
    }
}

/// A child's cell span: top row, left column, row span, column span.
type CellSpan = (usize, usize, usize, usize);

fn solve_composite(
    node: &Node,
    spacing: f32,
    next_leaf: &mut usize,
) -> Result<LayoutTree, ComposeError> {
    let children = node.children();
    let n = children.len();
    if n == 0 {
        return Err(ComposeError::Construction(
            "cannot lay out a composite with no children".to_string(),
        ));
    }

    let (grid, spans) = match node {
        Node::Grid { spec, .. } if spec.design().is_some() => design_cells(spec, n, spacing)?,
        Node::Grid { spec, .. } => uniform_cells(explicit_shape(spec, n)?, n, spacing),
        Node::Row { .. } => uniform_cells((1, n), n, spacing),
        Node::Column { .. } => uniform_cells((n, 1), n, spacing),
        _ => uniform_cells(auto_shape(n), n, spacing),
    };

    let mut solved = Vec::with_capacity(n);
    let mut alignment = AxisAlignment {
        col_axis_widths: vec![0.0; grid.ncol()],
        row_axis_heights: vec![0.0; grid.nrow()],
    };

    for (child, &(row, col, row_span, col_span)) in children.iter().zip(&spans) {
        let mut child_tree = solve_node(child, spacing, next_leaf)?;
        child_tree.rect = grid.cell_rect(row, col, row_span, col_span);

        let extents = subtree_axis_extents(child);
        let width = &mut alignment.col_axis_widths[col];
        *width = width.max(extents.left());
        let height = &mut alignment.row_axis_heights[row + row_span - 1];
        *height = height.max(extents.bottom());

        solved.push(child_tree);
    }

    Ok(LayoutTree {
        rect: Rect::unit(),
        content: LayoutContent::Group {
            children: solved,
            alignment,
        },
    })
}

/// Derives the shape of an explicitly constrained grid without a design.
fn explicit_shape(spec: &GridSpec, n: usize) -> Result<(usize, usize), ComposeError> {
    let shape = match (spec.nrow(), spec.ncol()) {
        (Some(nrow), Some(ncol)) => (nrow, ncol),
        (Some(nrow), None) => (nrow, n.div_ceil(nrow.max(1))),
        (None, Some(ncol)) => (n.div_ceil(ncol.max(1)), ncol),
        (None, None) => auto_shape(n),
    };

    if shape.0 == 0 || shape.1 == 0 {
        return Err(ComposeError::Construction(
            "grid dimensions must be positive".to_string(),
        ));
    }
    if shape.0 * shape.1 < n {
        return Err(ComposeError::Construction(format!(
            "grid of {}x{} cells cannot hold {n} children",
            shape.0, shape.1
        )));
    }
    Ok(shape)
}

/// Row-major placement of `n` children into a uniform grid.
fn uniform_cells((nrow, ncol): (usize, usize), n: usize, spacing: f32) -> (CellGrid, Vec<CellSpan>) {
    let spans = (0..n).map(|i| (i / ncol, i % ncol, 1, 1)).collect();
    (CellGrid::new(nrow, ncol, spacing), spans)
}

/// Placement dictated by a textual design: children map to regions in
/// first-occurrence order.
fn design_cells(
    spec: &GridSpec,
    n: usize,
    spacing: f32,
) -> Result<(CellGrid, Vec<CellSpan>), ComposeError> {
    let design = spec.design().expect("caller checked design presence");
    if design.len() != n {
        return Err(ComposeError::Construction(format!(
            "design has {} regions but the composite has {n} children",
            design.len()
        )));
    }

    let spans = design
        .regions()
        .iter()
        .map(|region| {
            (
                region.top(),
                region.left(),
                region.row_span(),
                region.col_span(),
            )
        })
        .collect();
    Ok((CellGrid::new(design.nrow(), design.ncol(), spacing), spans))
}

/// Maximum axis-strip extents over a subtree's panels.
fn subtree_axis_extents(node: &Node) -> AxisExtents {
    let mut left: f32 = 0.0;
    let mut bottom: f32 = 0.0;
    node.for_each_plot(&mut |plot| {
        if plot.role() == PlotRole::Panel {
            left = left.max(plot.axis_extents().left());
            bottom = bottom.max(plot.axis_extents().bottom());
        }
    });
    AxisExtents::new(left, bottom)
}

/// Union of the host subtree's panel regions, the rectangle an inset box
/// resolves against.
fn host_region(host: &Node, region: RefRegion) -> Result<Rect, ComposeError> {
    let mut acc: Option<Rect> = None;
    host.for_each_plot(&mut |plot| {
        if plot.role() == PlotRole::Panel {
            let rect = plot.region(region);
            acc = Some(match acc {
                Some(current) => current.union(rect),
                None => rect,
            });
        }
    });

    match acc {
        Some(rect) if !rect.is_degenerate() => Ok(rect),
        _ => Err(ComposeError::Construction(
            "inset host has no usable panel geometry".to_string(),
        )),
    }
}

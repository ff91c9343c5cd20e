//! Guide collection and deduplication.
//!
//! In the default mode every plot keeps its own guides. When collection
//! is requested, the collector walks the tree depth-first, strips each
//! panel's guides, and deduplicates them by rendered appearance — first
//! occurrence wins, encounter order is preserved among survivors. The
//! survivors either land in a reserved guide area (see
//! [`Node::guide_area`](crate::structure::Node::guide_area)) or render at
//! the ambient theme's legend position.

use indexmap::IndexMap;
use log::debug;

use quilt_core::guide::GuideDescriptor;
use quilt_core::plot::Plot;
use quilt_core::theme::LegendPosition;

use crate::structure::Node;

/// Whether guides stay with their plots or are collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuideMode {
    /// Each plot retains its own guides.
    #[default]
    Keep,
    /// Guides are stripped, deduplicated, and re-homed.
    Collect,
}

/// Where collected guides render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidePlacement {
    /// Inside the composition's reserved guide area.
    GuideArea,
    /// At the given edge of the figure.
    Legend(LegendPosition),
}

/// The result of a collection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedGuides {
    guides: Vec<GuideDescriptor>,
    placement: GuidePlacement,
}

impl CollectedGuides {
    /// Returns the surviving guides in encounter order.
    pub fn guides(&self) -> &[GuideDescriptor] {
        &self.guides
    }

    /// Returns where the survivors render.
    pub fn placement(&self) -> GuidePlacement {
        self.placement
    }
}

/// Runs a collection pass over the tree.
///
/// With [`GuideMode::Keep`] this is a no-op that reports no survivors.
/// With [`GuideMode::Collect`] every plot's guides (the reserved guide
/// area's included, which makes the pass idempotent) are drained,
/// deduplicated by [`GuideDescriptor::appearance_key`], and deposited
/// into the guide area when the tree reserves one.
pub fn collect(tree: &mut Node, mode: GuideMode, ambient: LegendPosition) -> CollectedGuides {
    if mode == GuideMode::Keep {
        return CollectedGuides {
            guides: Vec::new(),
            placement: GuidePlacement::Legend(ambient),
        };
    }

    let mut seen: IndexMap<String, GuideDescriptor> = IndexMap::new();
    let mut drained = 0usize;
    tree.for_each_plot_mut(&mut |plot| {
        for guide in plot.take_guides() {
            drained += 1;
            seen.entry(guide.appearance_key()).or_insert(guide);
        }
    });

    let survivors: Vec<GuideDescriptor> = seen.into_values().collect();
    debug!(drained = drained, survivors = survivors.len(); "Collected guides");

    match find_guide_slot(tree) {
        Some(slot) => {
            slot.deposit_guides(survivors.clone());
            CollectedGuides {
                guides: survivors,
                placement: GuidePlacement::GuideArea,
            }
        }
        None => CollectedGuides {
            guides: survivors,
            placement: GuidePlacement::Legend(ambient),
        },
    }
}

/// Finds the first reserved guide area in depth-first order.
fn find_guide_slot(node: &mut Node) -> Option<&mut Plot> {
    match node {
        Node::Leaf(plot) => {
            if plot.is_guide_slot() {
                Some(plot.as_mut())
            } else {
                None
            }
        }
        Node::Inset { host, overlay, .. } => {
            if has_guide_slot(host) {
                find_guide_slot(host)
            } else {
                find_guide_slot(overlay)
            }
        }
        composite => {
            let index = composite
                .children()
                .iter()
                .position(|child| has_guide_slot(child))?;
            find_guide_slot(&mut composite.children_mut()[index])
        }
    }
}

fn has_guide_slot(node: &Node) -> bool {
    let mut found = false;
    node.for_each_plot(&mut |plot| found |= plot.is_guide_slot());
    found
}

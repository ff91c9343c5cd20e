//! Layout solving for composition trees.
//!
//! Solving happens at render time: the tree's structure and constraints
//! are turned into a grid of normalized cell rectangles, recursively, so
//! that a nested subtree occupies its assigned cell as a single unit.

mod grid;
mod solver;

pub use grid::{GridShape, auto_shape};
pub use solver::{AxisAlignment, LayoutContent, LayoutTree, PanelPlacement, solve};

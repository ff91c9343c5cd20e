//! The composition tree.
//!
//! A composition is a recursive structure: a leaf is a single plot, an
//! internal node arranges its children horizontally, vertically, in a
//! grid, or as an inset overlay. A leaf and an assembled subtree are
//! indistinguishable in the API, so compositions nest freely.

mod node;

pub use node::{GridSpec, LayoutOptions, Node};

//! Quilt Core Types and Definitions
//!
//! This crate provides the foundational types for the quilt composition
//! engine. It includes:
//!
//! - **Geometry**: Edge-based rectangles and friends ([`geometry`] module)
//! - **Lengths**: Physical units and edge extents ([`length`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Themes**: Per-attribute optional settings with fill-in merging
//!   ([`theme`] module)
//! - **Guides**: Legend descriptors and appearance keys ([`guide`] module)
//! - **Tags**: Subplot label sequences ([`tag`] module)
//! - **Plots**: The engine-side view of an external plot ([`plot`] module)

pub mod color;
pub mod geometry;
pub mod guide;
pub mod length;
pub mod plot;
pub mod tag;
pub mod theme;

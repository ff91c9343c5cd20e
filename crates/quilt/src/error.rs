//! Error types for composition operations.
//!
//! This module provides the main error type [`ComposeError`] which wraps
//! the error conditions that can occur while building and solving a
//! composition. Every error is a plain value returned to the caller; no
//! operation retries, and a failed operation leaves the tree unmodified,
//! so callers may fix their inputs and invoke the same operation again.

use thiserror::Error;

use quilt_parser::DesignError;

/// The main error type for composition operations.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A malformed textual design, reported at tree-build time.
    #[error("{0}")]
    Design(#[from] DesignError),

    /// A structurally invalid composition, such as a design whose region
    /// count does not match the child count.
    #[error("Construction error: {0}")]
    Construction(String),

    /// Invalid configuration values, such as an unparseable color string.
    #[error("Config error: {0}")]
    Config(String),

    /// An out-of-range index on indexed get/set.
    #[error("index {index} out of range for composition with {len} children")]
    Index {
        /// The requested index.
        index: usize,
        /// The number of addressable children.
        len: usize,
    },

    /// An inset box that resolved to zero or negative width or height.
    #[error(
        "inset bounds degenerate after resolution: \
         left={left}, bottom={bottom}, right={right}, top={top}"
    )]
    DegenerateBounds {
        /// Resolved left edge, in points.
        left: f32,
        /// Resolved bottom edge, in points.
        bottom: f32,
        /// Resolved right edge, in points.
        right: f32,
        /// Resolved top edge, in points.
        top: f32,
    },
}

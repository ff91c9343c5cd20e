//! Inset bounds resolution.
//!
//! An inset overlays one composition on a region of another. Its bounding
//! box is given per edge as either a fraction of the reference region or
//! an absolute physical length measured inward from the region's
//! corresponding edge: "top minus 15 mm" anchors 15 mm below the region's
//! top, never 15 mm from the page origin.

use quilt_core::geometry::Rect;
use quilt_core::length::Extent;
use quilt_core::plot::{Plot, RefRegion};

use crate::error::ComposeError;

/// The four edge specifications of an inset box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsetBounds {
    left: Extent,
    bottom: Extent,
    right: Extent,
    top: Extent,
}

impl InsetBounds {
    /// Creates bounds from four edge specifications.
    pub fn new(left: Extent, bottom: Extent, right: Extent, top: Extent) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Creates bounds with every edge given as a fraction of the
    /// reference region.
    pub fn fractional(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left: Extent::Fraction(left),
            bottom: Extent::Fraction(bottom),
            right: Extent::Fraction(right),
            top: Extent::Fraction(top),
        }
    }

    /// Returns the left edge specification.
    pub fn left(&self) -> Extent {
        self.left
    }

    /// Returns the bottom edge specification.
    pub fn bottom(&self) -> Extent {
        self.bottom
    }

    /// Returns the right edge specification.
    pub fn right(&self) -> Extent {
        self.right
    }

    /// Returns the top edge specification.
    pub fn top(&self) -> Extent {
        self.top
    }

    /// Resolves the bounds against a reference region, in points.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::DegenerateBounds`] if the resolved box has
    /// zero or negative width or height.
    pub fn resolve(&self, region: Rect) -> Result<Rect, ComposeError> {
        let width = region.width();
        let height = region.height();

        let left = match self.left {
            Extent::Fraction(f) => region.left() + f * width,
            Extent::Absolute(len) => region.left() + len.to_points(),
        };
        let right = match self.right {
            Extent::Fraction(f) => region.left() + f * width,
            Extent::Absolute(len) => region.right() - len.to_points(),
        };
        let bottom = match self.bottom {
            Extent::Fraction(f) => region.bottom() + f * height,
            Extent::Absolute(len) => region.bottom() + len.to_points(),
        };
        let top = match self.top {
            Extent::Fraction(f) => region.bottom() + f * height,
            Extent::Absolute(len) => region.top() - len.to_points(),
        };

        if right <= left || top <= bottom {
            return Err(ComposeError::DegenerateBounds {
                left,
                bottom,
                right,
                top,
            });
        }

        Ok(Rect::new(left, bottom, right, top))
    }
}

/// Resolves an inset box against a host plot's reference region.
///
/// # Errors
///
/// Returns [`ComposeError::DegenerateBounds`] if the box degenerates
/// after resolution.
pub fn place(host: &Plot, bounds: &InsetBounds, align_to: RefRegion) -> Result<Rect, ComposeError> {
    bounds.resolve(host.region(align_to))
}

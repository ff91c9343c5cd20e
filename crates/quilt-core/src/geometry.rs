//! Geometric primitives for composition layout.
//!
//! All layout computation works on edge-based rectangles: a [`Rect`] stores
//! its four edges directly (left, bottom, right, top) because every layout
//! pass reasons about edges, not corner-plus-size pairs. Coordinates follow
//! the document convention: x grows rightward, y grows upward, so
//! `bottom <= top` for a well-formed rectangle.
//!
//! Rectangles come in two flavors that share the same type:
//! - *absolute* rects in points, as handed in by the plot collaborator;
//! - *normalized* rects in [0,1]×[0,1], as produced by the layout solver
//!   relative to a parent region.
//!
//! [`Rect::denormalize`] maps the second flavor into the first.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height of a region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new size with the larger width and height of the two.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if either dimension is zero or negative.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An edge-based rectangle: left, bottom, right, top.
///
/// The y-axis grows upward, so `bottom` is the smaller y edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Rect {
    left: f32,
    bottom: f32,
    right: f32,
    top: f32,
}

impl Rect {
    /// Creates a rectangle from its four edges.
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Creates a rectangle from an origin (bottom-left corner) and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x(),
            bottom: origin.y(),
            right: origin.x() + size.width(),
            top: origin.y() + size.height(),
        }
    }

    /// The unit rectangle [0,1]×[0,1], the identity of normalized layout.
    pub fn unit() -> Self {
        Self {
            left: 0.0,
            bottom: 0.0,
            right: 1.0,
            top: 1.0,
        }
    }

    /// Returns the left edge.
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the bottom edge.
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the right edge.
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the top edge.
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    /// Returns the bottom-left corner.
    pub fn origin(self) -> Point {
        Point {
            x: self.left,
            y: self.bottom,
        }
    }

    /// Returns the dimensions as a [`Size`].
    pub fn size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if the rectangle has zero or negative extent on
    /// either axis.
    pub fn is_degenerate(self) -> bool {
        self.right <= self.left || self.top <= self.bottom
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Self {
        Self {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn contains(self, other: Rect) -> bool {
        other.left >= self.left
            && other.bottom >= self.bottom
            && other.right <= self.right
            && other.top <= self.top
    }

    /// Moves the rectangle by the given offset.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            bottom: self.bottom + dy,
            right: self.right + dx,
            top: self.top + dy,
        }
    }

    /// Maps a normalized rectangle (`self`, in [0,1] units) into the
    /// absolute coordinates of `parent`.
    ///
    /// Edges are interpolated linearly, so `Rect::unit()` maps to `parent`
    /// itself.
    pub fn denormalize(self, parent: Rect) -> Self {
        let w = parent.width();
        let h = parent.height();
        Self {
            left: parent.left + self.left * w,
            bottom: parent.bottom + self.bottom * h,
            right: parent.left + self.right * w,
            top: parent.bottom + self.top * h,
        }
    }

    /// Re-expresses `self` (absolute) in normalized coordinates of
    /// `parent`. Inverse of [`Rect::denormalize`] for non-degenerate
    /// parents.
    pub fn relative_to(self, parent: Rect) -> Self {
        let w = parent.width();
        let h = parent.height();
        Self {
            left: (self.left - parent.left) / w,
            bottom: (self.bottom - parent.bottom) / h,
            right: (self.right - parent.left) / w,
            top: (self.top - parent.bottom) / h,
        }
    }

    /// Shrinks the rectangle by the given insets.
    pub fn inset(self, insets: Insets) -> Self {
        Self {
            left: self.left + insets.left,
            bottom: self.bottom + insets.bottom,
            right: self.right - insets.right,
            top: self.top - insets.top,
        }
    }
}

/// Spacing around a region with potentially different values per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value.
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value.
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value.
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value.
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(2.0, 3.0, 7.0, 11.0);
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 8.0);
        assert_eq!(rect.origin(), Point::new(2.0, 3.0));
        assert_eq!(rect.size(), Size::new(5.0, 8.0));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(rect.left(), 1.0);
        assert_eq!(rect.bottom(), 2.0);
        assert_eq!(rect.right(), 4.0);
        assert_eq!(rect.top(), 6.0);
    }

    #[test]
    fn test_rect_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 1.0).is_degenerate()); // zero width
        assert!(Rect::new(0.0, 0.0, 1.0, 0.0).is_degenerate()); // zero height
        assert!(Rect::new(2.0, 0.0, 1.0, 1.0).is_degenerate()); // inverted
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(1.0, 2.0, 5.0, 6.0);
        let b = Rect::new(3.0, 0.0, 8.0, 4.0);
        let merged = a.union(b);
        assert_eq!(merged, Rect::new(1.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(Rect::new(1.0, 1.0, 9.0, 9.0)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(Rect::new(1.0, 1.0, 11.0, 9.0)));
    }

    #[test]
    fn test_rect_translate() {
        let rect = Rect::new(1.0, 2.0, 5.0, 6.0);
        let moved = rect.translate(3.0, -1.0);
        assert_eq!(moved, Rect::new(4.0, 1.0, 8.0, 5.0));
    }

    #[test]
    fn test_denormalize_unit_is_identity() {
        let parent = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(Rect::unit().denormalize(parent), parent);
    }

    #[test]
    fn test_denormalize_half_cell() {
        let parent = Rect::new(0.0, 0.0, 200.0, 100.0);
        let cell = Rect::new(0.5, 0.0, 1.0, 1.0);
        let abs = cell.denormalize(parent);
        assert_eq!(abs, Rect::new(100.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_relative_to_roundtrip() {
        let parent = Rect::new(10.0, 20.0, 110.0, 220.0);
        let child = Rect::new(35.0, 70.0, 60.0, 120.0);
        let norm = child.relative_to(parent);
        let back = norm.denormalize(parent);
        assert_approx_eq!(f32, back.left(), child.left());
        assert_approx_eq!(f32, back.bottom(), child.bottom());
        assert_approx_eq!(f32, back.right(), child.right());
        assert_approx_eq!(f32, back.top(), child.top());
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let shrunk = rect.inset(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(shrunk, Rect::new(4.0, 3.0, 8.0, 9.0));
    }

    #[test]
    fn test_size_max() {
        let a = Size::new(10.0, 20.0);
        let b = Size::new(15.0, 18.0);
        assert_eq!(a.max(b), Size::new(15.0, 20.0));
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::new(0.0, 5.0).is_degenerate());
        assert!(Size::new(5.0, -1.0).is_degenerate());
        assert!(!Size::new(5.0, 5.0).is_degenerate());
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 6.0); // 2.0 + 4.0
        assert_eq!(insets.vertical_sum(), 4.0); // 1.0 + 3.0
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(5.0);
        assert_eq!(insets.top(), 5.0);
        assert_eq!(insets.right(), 5.0);
        assert_eq!(insets.bottom(), 5.0);
        assert_eq!(insets.left(), 5.0);
    }
}

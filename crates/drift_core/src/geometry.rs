//! Geometry primitives
//!
//! Plain f32 structs for points, sizes, rectangles and edge insets.
//! Malformed numeric input (NaN, negative sizes) is normalized to safe
//! defaults by the `sanitized` constructors rather than propagated.

/// A 2D point. Scroll offsets are stored as points and may carry
/// fractional (sub-pixel) precision; round only at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Replace NaN components with zero.
    pub fn sanitized(self) -> Self {
        Self {
            x: if self.x.is_nan() { 0.0 } else { self.x },
            y: if self.y.is_nan() { 0.0 } else { self.y },
        }
    }

    /// Round both components to the nearest integer pixel.
    pub fn rounded(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

/// A 2D size (width x height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replace NaN or negative dimensions with zero.
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_nan() || v < 0.0 { 0.0 } else { v };
        Self {
            width: fix(self.width),
            height: fix(self.height),
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// True if `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

/// Edge insets (margins applied inside a bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Replace NaN components with zero.
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_nan() { 0.0 } else { v };
        Self {
            top: fix(self.top),
            left: fix(self.left),
            bottom: fix(self.bottom),
            right: fix(self.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_sanitized_rejects_nan_and_negative() {
        let s = Size::new(f32::NAN, -10.0).sanitized();
        assert_eq!(s.width, 0.0);
        assert_eq!(s.height, 0.0);

        let ok = Size::new(100.0, 200.0).sanitized();
        assert_eq!(ok.width, 100.0);
        assert_eq!(ok.height, 200.0);
    }

    #[test]
    fn test_point_rounded() {
        let p = Point::new(1.4, -2.6).rounded();
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, -3.0);
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(!outer.contains_rect(&Rect::new(60.0, 60.0, 50.0, 50.0)));
        // Touching edges still counts as contained
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
    }
}

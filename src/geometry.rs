//! Geometry value types.
//!
//! [`Point`], [`Size`] and [`Rect`] carry `f64` coordinates and are used for
//! scaled (logical) geometry. [`PixelRect`] and [`PixelPoint`] carry the
//! integer pixel values the platform reports.
//!
//! Note the two notions of emptiness: a [`Point`] or [`Size`] is empty only
//! when both components are exactly zero, while a [`Rect`] is empty as soon as
//! its width or height is not positive.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hash a coordinate so that values comparing equal hash equally.
fn hash_coord<H: Hasher>(value: f64, state: &mut H) {
    // -0.0 == 0.0
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

/// An ordered pair of x and y coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The zero point.
    pub const EMPTY: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are exactly zero.
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<Size> for Point {
    fn from(size: Size) -> Self {
        Point::new(size.width, size.height)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coord(self.x, state);
        hash_coord(self.y, state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X={}, Y={}}}", self.x, self.y)
    }
}

/// The size of a rectangular region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const EMPTY: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both components are exactly zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Reinterpret (width, height) as (x, y).
    pub fn to_point(self) -> Point {
        Point::from(self)
    }
}

impl From<Point> for Size {
    fn from(point: Point) -> Self {
        Size::new(point.x, point.y)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coord(self.width, state);
        hash_coord(self.height, state);
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Width={}, Height={}}}", self.width, self.height)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left coordinate.
    pub x: f64,
    /// Top coordinate.
    pub y: f64,
    /// Width in screen units.
    pub width: f64,
    /// Height in screen units.
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its corner coordinates.
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when the width or the height is not positive.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether a point is inside this rectangle.
    ///
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Check whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }
}

impl From<PixelRect> for Rect {
    fn from(rect: PixelRect) -> Self {
        Rect::new(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        )
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location().hash(state);
        self.size().hash(state);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X={}, Y={}, Width={}, Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in integer pixels, as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from the left/top/right/bottom edges most platform
    /// APIs report.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment, like [`Rect::contains`].
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Smallest rectangle enclosing both.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        PixelRect::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Divide x, y, width and height by `factor` independently.
    pub fn scaled(&self, factor: f64) -> Rect {
        Rect::new(
            self.x as f64 / factor,
            self.y as f64 / factor,
            self.width as f64 / factor,
            self.height as f64 / factor,
        )
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X={}, Y={}, Width={}, Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_float_geometry_hash_is_structural() {
        assert_eq!(hash_of(&Point::new(0.0, 1.5)), hash_of(&Point::new(-0.0, 1.5)));
        assert_eq!(Point::new(0.0, 1.5), Point::new(-0.0, 1.5));
        assert_eq!(hash_of(&Size::new(-0.0, 2.0)), hash_of(&Size::new(0.0, 2.0)));

        let rects: HashSet<Rect> = [
            Rect::new(0.0, 0.0, 1536.0, 864.0),
            Rect::new(-0.0, 0.0, 1536.0, 864.0),
            Rect::new(1536.0, 0.0, 1024.0, 819.2),
        ]
        .into_iter()
        .collect();
        assert_eq!(rects.len(), 2);
        assert!(rects.contains(&Rect::new(0.0, -0.0, 1536.0, 864.0)));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Point::new(9.999, 9.999)));
        assert!(rect.contains_point(Point::new(0.0, 0.0)));
        assert!(!rect.contains_point(Point::new(10.0, 0.0)));
        assert!(!rect.contains_point(Point::new(0.0, 10.0)));
        assert!(!rect.contains(-0.001, 5.0));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(outer.contains_rect(&Rect::new(2.0, 3.0, 4.0, 5.0)));
        assert!(!outer.contains_rect(&Rect::new(2.0, 3.0, 9.0, 5.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_emptiness_differs_between_point_and_rect() {
        assert!(Point::new(0.0, 0.0).is_empty());
        assert!(Point::EMPTY.is_empty());
        assert!(!Point::new(0.0, 0.0001).is_empty());
        assert!(Size::default().is_empty());
        assert!(!Size::new(0.0, 3.0).is_empty());

        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_empty());
        assert!(Rect::new(4.0, 4.0, 5.0, -1.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 0.5, 0.5).is_empty());
    }

    #[test]
    fn test_rect_edges_and_from_ltrb() {
        let rect = Rect::from_ltrb(-10.0, 5.0, 30.0, 25.0);
        assert_eq!(rect, Rect::new(-10.0, 5.0, 40.0, 20.0));
        assert_eq!(rect.left(), -10.0);
        assert_eq!(rect.top(), 5.0);
        assert_eq!(rect.right(), 30.0);
        assert_eq!(rect.bottom(), 25.0);
        assert_eq!(rect.location(), Point::new(-10.0, 5.0));
        assert_eq!(rect.size(), Size::new(40.0, 20.0));
    }

    #[test]
    fn test_size_arithmetic_and_conversion() {
        let a = Size::new(3.0, 4.0);
        let b = Size::new(1.5, 0.5);
        assert_eq!(a + b, Size::new(4.5, 4.5));
        assert_eq!(a - b, Size::new(1.5, 3.5));
        assert_eq!(a.to_point(), Point::new(3.0, 4.0));
        assert_eq!(Size::from(Point::new(7.0, 8.0)), Size::new(7.0, 8.0));
    }

    #[test]
    fn test_non_finite_values_propagate() {
        let nan = Point::new(f64::NAN, 0.0);
        assert_ne!(nan, nan);
        assert!(!nan.is_empty());

        let rect = Rect::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert_eq!(rect.right(), f64::INFINITY);
        assert!(rect.contains(1e300, 5.0));
        assert!(!Rect::new(f64::NAN, 0.0, 10.0, 10.0).contains(5.0, 5.0));

        let sum = Size::new(f64::INFINITY, 1.0) - Size::new(f64::INFINITY, 1.0);
        assert!(sum.width.is_nan());
    }

    #[test]
    fn test_pixel_rect_scaling() {
        let rect = PixelRect::from_ltrb(1920, 0, 3200, 1024);
        assert_eq!(rect, PixelRect::new(1920, 0, 1280, 1024));
        assert_eq!(rect.scaled(1.25), Rect::new(1536.0, 0.0, 1024.0, 819.2));
        assert_eq!(Rect::from(rect), Rect::new(1920.0, 0.0, 1280.0, 1024.0));
    }

    #[test]
    fn test_pixel_rect_union_and_contains() {
        let left = PixelRect::new(-1280, -200, 1280, 1024);
        let right = PixelRect::new(0, 0, 1920, 1080);
        assert_eq!(left.union(&right), PixelRect::from_ltrb(-1280, -200, 1920, 1080));
        assert!(right.contains(PixelPoint::new(0, 0)));
        assert!(!right.contains(PixelPoint::new(1920, 5)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "{X=1, Y=2.5}");
        assert_eq!(Size::new(3.0, 4.0).to_string(), "{Width=3, Height=4}");
        assert_eq!(
            PixelRect::new(0, 0, 1920, 1080).to_string(),
            "{X=0, Y=0, Width=1920, Height=1080}"
        );
    }
}

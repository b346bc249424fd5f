//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four axis neighbours in lookup order: up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// Whether `other` is exactly one unit away along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Midpoint of two points, rounding toward zero.
    #[inline]
    pub const fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A half-open rectangle of cells: `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The rectangle anchored at the origin with `size.x` columns and
    /// `size.y` rows.
    #[inline]
    pub const fn from_size(size: Point) -> Self {
        Self::new(Point::ZERO, size)
    }

    /// Size as a `Point` (columns in x, rows in y).
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.size().x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.size().y
    }

    /// Number of cells; zero when either side is empty or inverted.
    #[inline]
    pub fn len(self) -> usize {
        let size = self.size();
        if size.x <= 0 || size.y <= 0 {
            return 0;
        }
        size.x as usize * size.y as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let w = self.range.width() as usize;
        let p = self.range.min + Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let n = Point::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(2, 1),
                Point::new(2, 3),
                Point::new(1, 2),
                Point::new(3, 2),
            ]
        );
    }

    #[test]
    fn adjacency_is_single_axis_unit_step() {
        let p = Point::new(4, 4);
        assert!(p.is_adjacent(Point::new(4, 5)));
        assert!(p.is_adjacent(Point::new(3, 4)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(5, 5)));
        assert!(!p.is_adjacent(Point::new(6, 4)));
    }

    #[test]
    fn midpoint_between_rooms_is_connector() {
        assert_eq!(Point::new(2, 4).midpoint(Point::new(4, 4)), Point::new(3, 4));
        assert_eq!(Point::new(0, 2).midpoint(Point::new(0, 0)), Point::new(0, 1));
    }

    #[test]
    fn range_basics() {
        let r = Range::from_size(Point::new(3, 2));
        assert_eq!(r.size(), Point::new(3, 2));
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(Point::new(1, 1), Point::new(4, 3));
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(1, 1));
        assert_eq!(pts[1], Point::new(2, 1));
        assert_eq!(pts[3], Point::new(1, 2));
        assert_eq!(pts[5], Point::new(3, 2));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_and_inverted_ranges_yield_nothing() {
        for r in [
            Range::from_size(Point::ZERO),
            Range::from_size(Point::new(3, 0)),
            Range::new(Point::new(3, 2), Point::ZERO),
        ] {
            assert!(r.is_empty());
            assert_eq!(r.len(), 0);
            assert_eq!(r.iter().count(), 0);
        }
    }
}

//! Geometry Types
//!
//! Plain-data point, size, and rectangle types with the classic
//! origin-plus-extent rectangle model. Coordinates are world units with Y up.
//! All three types are `#[repr(C)]` plain old data so they can be stored in
//! binary buffers directly; `glam` conversions are provided for math-heavy
//! call sites.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D position or offset.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

static_assertions::assert_eq_size!(Point, [f32; 2]);

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (avoids the sqrt when only
    /// comparing distances).
    pub fn distance_squared(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// A 2D extent (width and height).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

static_assertions::assert_eq_size!(Size, [f32; 2]);

impl Size {
    /// The empty size (0 x 0).
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area covered by this size.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Size::new(v.x, v.y)
    }
}

impl From<Size> for Vec2 {
    fn from(s: Size) -> Self {
        Vec2::new(s.width, s.height)
    }
}

/// An axis-aligned rectangle described by its origin (bottom-left corner)
/// and size.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

static_assertions::assert_eq_size!(Rect, [f32; 4]);

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Smallest X coordinate covered by the rectangle.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Largest X coordinate covered by the rectangle.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Smallest Y coordinate covered by the rectangle.
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Vertical midpoint.
    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Largest Y coordinate covered by the rectangle.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Whether the two rectangles overlap.
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        !(self.max_x() < other.min_x()
            || other.max_x() < self.min_x()
            || self.max_y() < other.min_y()
            || other.max_y() < self.min_y())
    }
}

//! 2D position

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// A position `(x, y)` in the field's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Displacement from this point to `other`.
    pub fn impact_vector(&self, other: Point2D) -> Vector2D {
        Vector2D::new(other.x - self.x, other.y - self.y)
    }

    /// Unit direction from this point to `other`; `None` when coincident.
    pub fn impact_direction(&self, other: Point2D) -> Option<Vector2D> {
        self.impact_vector(other).unit()
    }

    /// Contact-surface tangent between two circles centered here and at
    /// `other`: the normal of the impact vector. `None` when coincident.
    pub fn contact_vector(&self, other: Point2D) -> Option<Vector2D> {
        self.impact_vector(other).normal()
    }

    /// Unit contact-surface tangent; `None` when coincident.
    pub fn contact_direction(&self, other: Point2D) -> Option<Vector2D> {
        self.contact_vector(other).and_then(|v| v.unit())
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;

    fn add(self, displacement: Vector2D) -> Point2D {
        Point2D::new(self.x + displacement.dx, self.y + displacement.dy)
    }
}

impl AddAssign<Vector2D> for Point2D {
    fn add_assign(&mut self, displacement: Vector2D) {
        self.x += displacement.dx;
        self.y += displacement.dy;
    }
}

// Coordinate-wise sum, kept as a convenience rather than a geometric
// operation.
impl Add for Point2D {
    type Output = Point2D;

    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

//! 2D displacement vector

use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D displacement `(dx, dy)`.
///
/// Copy value type; arithmetic never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Fallback direction for call sites that must normalize a vector that
    /// may have zero magnitude (coincident centers).
    pub const X_AXIS: Self = Self { dx: 1.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Unit vector with the same direction, or `None` for the zero vector.
    pub fn unit(&self) -> Option<Vector2D> {
        let magnitude = self.magnitude();
        (magnitude > 0.0).then(|| *self / magnitude)
    }

    /// Unit vector, or `fallback` when this is the zero vector.
    pub fn unit_or(&self, fallback: Vector2D) -> Vector2D {
        self.unit().unwrap_or(fallback)
    }

    /// Unit vector perpendicular to this one: `(dy, -dx)` normalized.
    /// `None` for the zero vector.
    pub fn normal(&self) -> Option<Vector2D> {
        Vector2D::new(self.dy, -self.dx).unit()
    }

    /// Direction angle in radians, measured from the +x axis.
    ///
    /// `atan(dy/dx)` adjusted into the correct quadrant when `dx < 0`.
    /// On the vertical axis (`dx == 0`) the angle is ±π/2 by the sign of
    /// `dy`; the zero vector maps to 0.0.
    pub fn angle(&self) -> f64 {
        if self.dx == 0.0 {
            if self.dy == 0.0 {
                return 0.0;
            }
            return FRAC_PI_2.copysign(self.dy);
        }
        let tangent = (self.dy / self.dx).atan();
        if self.dx > 0.0 {
            tangent
        } else if self.dy > 0.0 {
            tangent + PI
        } else {
            tangent - PI
        }
    }

    /// Length of this vector's projection onto `target`.
    /// `None` when `target` is the zero vector.
    pub fn scalar_project(&self, target: Vector2D) -> Option<f64> {
        let magnitude = target.magnitude();
        (magnitude > 0.0).then(|| self.dot(target) / magnitude)
    }

    /// Projection of this vector onto `target`.
    /// `None` when `target` is the zero vector.
    pub fn vector_project(&self, target: Vector2D) -> Option<Vector2D> {
        Some(target.unit()? * self.scalar_project(target)?)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.dx - other.dx, self.dy - other.dy)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.dx * scalar, self.dy * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        vector * self
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.dx / scalar, self.dy / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_magnitude() {
        assert!((Vector2D::new(3.0, 4.0).magnitude() - 5.0).abs() < TOL);
        assert_eq!(Vector2D::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_unit_has_magnitude_one() {
        let unit = Vector2D::new(3.0, 4.0).unit().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < TOL);
        assert!((unit.dx - 0.6).abs() < TOL);
        assert!((unit.dy - 0.8).abs() < TOL);
    }

    #[test]
    fn test_unit_of_zero_vector_is_none() {
        assert_eq!(Vector2D::ZERO.unit(), None);
        assert_eq!(Vector2D::ZERO.unit_or(Vector2D::X_AXIS), Vector2D::X_AXIS);
    }

    #[test]
    fn test_normal_is_orthogonal_unit() {
        let v = Vector2D::new(2.0, -7.0);
        let normal = v.normal().unwrap();
        assert!(v.dot(normal).abs() < TOL * v.magnitude());
        assert!((normal.magnitude() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_angle_quadrants() {
        assert!((Vector2D::new(1.0, 1.0).angle() - FRAC_PI_4).abs() < TOL);
        assert!((Vector2D::new(-1.0, 1.0).angle() - 3.0 * FRAC_PI_4).abs() < TOL);
        assert!((Vector2D::new(-1.0, -1.0).angle() + 3.0 * FRAC_PI_4).abs() < TOL);
        assert!((Vector2D::new(1.0, -1.0).angle() + FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn test_angle_on_vertical_axis() {
        assert!((Vector2D::new(0.0, 2.0).angle() - FRAC_PI_2).abs() < TOL);
        assert!((Vector2D::new(0.0, -2.0).angle() + FRAC_PI_2).abs() < TOL);
        assert_eq!(Vector2D::ZERO.angle(), 0.0);
    }

    #[test]
    fn test_scalar_project() {
        let v = Vector2D::new(3.0, 4.0);
        let along_x = v.scalar_project(Vector2D::new(2.0, 0.0)).unwrap();
        assert!((along_x - 3.0).abs() < TOL);
        assert_eq!(v.scalar_project(Vector2D::ZERO), None);
    }

    #[test]
    fn test_vector_project() {
        let v = Vector2D::new(3.0, 4.0);
        let projected = v.vector_project(Vector2D::new(5.0, 0.0)).unwrap();
        assert!((projected.dx - 3.0).abs() < TOL);
        assert!(projected.dy.abs() < TOL);
        assert_eq!(v.vector_project(Vector2D::ZERO), None);
    }

    #[test]
    fn test_arithmetic_operators() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(-3.0, 0.5);
        assert_eq!(a + b, Vector2D::new(-2.0, 2.5));
        assert_eq!(a - b, Vector2D::new(4.0, 1.5));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2D::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vector2D::new(0.5, 1.0));
        assert_eq!(a.dot(b), -2.0);
    }
}

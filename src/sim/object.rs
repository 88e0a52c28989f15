//! Movable space objects

use serde::{Deserialize, Serialize};

use crate::physics::{Point2D, Vector2D};

/// Mass at or below this is treated as massless in collision response.
pub const MASSLESS_EPSILON: f64 = 1e-9;

/// Object variant tag. Collision behavior is dispatched on pairs of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Ship,
    Asteroid,
    Missile,
    Explosion,
}

impl ObjectKind {
    /// Render glyph for text visualizers.
    pub fn symbol(&self) -> char {
        match self {
            ObjectKind::Ship => '^',
            ObjectKind::Asteroid => 'O',
            ObjectKind::Missile => '|',
            ObjectKind::Explosion => '*',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Ship => "Ship",
            ObjectKind::Asteroid => "Asteroid",
            ObjectKind::Missile => "Missile",
            ObjectKind::Explosion => "Explosion",
        }
    }
}

/// A movable object in the field: circular extent, point mass.
///
/// `ttl_ticks` is `Some` only for explosions, whose lifetime budget is
/// advanced once per simulation tick by the trim step. No background
/// timers anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceObject {
    pub kind: ObjectKind,
    pub center: Point2D,
    pub velocity: Vector2D,
    pub radius: f64,
    pub mass: f64,
    pub ttl_ticks: Option<u32>,
}

impl SpaceObject {
    pub fn new(
        kind: ObjectKind,
        center: Point2D,
        velocity: Vector2D,
        radius: f64,
        mass: f64,
    ) -> Self {
        Self {
            kind,
            center,
            velocity,
            radius,
            mass,
            ttl_ticks: None,
        }
    }

    /// A stationary, massless explosion effect with a tick-counted lifetime.
    pub fn explosion(center: Point2D, radius: f64, lifetime_ticks: u32) -> Self {
        Self {
            kind: ObjectKind::Explosion,
            center,
            velocity: Vector2D::ZERO,
            radius,
            mass: 0.0,
            ttl_ticks: Some(lifetime_ticks),
        }
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    /// One tick of motion.
    pub fn advance(&mut self) {
        self.center += self.velocity;
    }

    /// Circular extents overlap (touching counts).
    pub fn impacts(&self, other: &SpaceObject) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    pub fn is_massless(&self) -> bool {
        self.mass <= MASSLESS_EPSILON
    }
}

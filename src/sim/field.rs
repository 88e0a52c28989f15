//! The space field
//!
//! Owns every live object and the closed boundary ranges. Objects may
//! transiently leave the boundary; they are only removed by the explicit
//! trim step. All mutation happens on the single simulation thread.

use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::MISSILE_LAUNCH_GAP;
use crate::physics::{Point2D, Vector2D};
use crate::ports::RandomGenerator;

use super::collision::{self, Outcome};
use super::object::{ObjectKind, SpaceObject};

/// Address of one object in the combined sequence, snapshotted at the
/// start of a collision pass. Indices refer to the collections as they
/// were at snapshot time; nothing is removed until the pass ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Ship,
    Asteroid(usize),
    Missile(usize),
    Explosion(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceField {
    config: GameConfig,
    pub ship: SpaceObject,
    pub asteroids: Vec<SpaceObject>,
    pub missiles: Vec<SpaceObject>,
    pub explosions: Vec<SpaceObject>,
    boundary_x: RangeInclusive<f64>,
    boundary_y: RangeInclusive<f64>,
    score: f64,
    exploded_asteroids: u32,
}

impl SpaceField {
    pub fn new(config: &GameConfig) -> Self {
        let ship = SpaceObject::new(
            ObjectKind::Ship,
            Point2D::new(config.field_width / 2.0, config.field_height / 2.0),
            Vector2D::ZERO,
            config.ship_radius,
            config.ship_mass,
        );
        Self {
            config: config.clone(),
            ship,
            asteroids: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            boundary_x: 0.0..=config.field_width,
            boundary_y: 0.0..=config.field_height,
            score: 0.0,
            exploded_asteroids: 0,
        }
    }

    pub fn boundary_x(&self) -> &RangeInclusive<f64> {
        &self.boundary_x
    }

    pub fn boundary_y(&self) -> &RangeInclusive<f64> {
        &self.boundary_y
    }

    /// Running score, incremented on confirmed asteroid destruction.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn exploded_asteroids(&self) -> u32 {
        self.exploded_asteroids
    }

    /// Ship + asteroids + missiles + explosions, in scan and render order.
    pub fn space_objects(&self) -> impl Iterator<Item = &SpaceObject> + '_ {
        std::iter::once(&self.ship)
            .chain(self.asteroids.iter())
            .chain(self.missiles.iter())
            .chain(self.explosions.iter())
    }

    /// Spawn an asteroid at the top edge, aimed inward, with size, mass,
    /// and velocity drawn from the configured ranges.
    pub fn generate_asteroid<R: RandomGenerator + ?Sized>(&mut self, rng: &mut R) {
        let center = Point2D::new(
            rng.generate_in_range(*self.boundary_x.start(), *self.boundary_x.end()),
            *self.boundary_y.end(),
        );
        let drift = self.config.asteroid_max_drift;
        let velocity = Vector2D::new(
            rng.generate_in_range(-drift, drift),
            -rng.generate_in_range(self.config.asteroid_min_speed, self.config.asteroid_max_speed),
        );
        let radius =
            rng.generate_in_range(self.config.asteroid_min_radius, self.config.asteroid_max_radius);
        let mass =
            rng.generate_in_range(self.config.asteroid_min_mass, self.config.asteroid_max_mass);
        debug!(
            "asteroid spawned at ({:.1}, {:.1}), r={:.1}",
            center.x, center.y, radius
        );
        self.asteroids.push(SpaceObject::new(
            ObjectKind::Asteroid,
            center,
            velocity,
            radius,
            mass,
        ));
    }

    /// Spawn a missile just above the ship's nose, flying straight up at
    /// the configured speed.
    pub fn generate_missile(&mut self) {
        let clearance = self.ship.radius + self.config.missile_radius + MISSILE_LAUNCH_GAP;
        let center = self.ship.center + Vector2D::new(0.0, clearance);
        self.missiles.push(SpaceObject::new(
            ObjectKind::Missile,
            center,
            Vector2D::new(0.0, self.config.missile_speed),
            self.config.missile_radius,
            self.config.missile_mass,
        ));
    }

    /// Consume a confirmed missile–asteroid pair: remove both, spawn an
    /// explosion where the asteroid was, and credit the kill.
    pub fn generate_explosion(&mut self, missile_index: usize, asteroid_index: usize) {
        let asteroid = self.asteroids.remove(asteroid_index);
        self.missiles.remove(missile_index);
        self.explosions.push(SpaceObject::explosion(
            asteroid.center,
            asteroid.radius,
            self.config.explosion_lifetime_ticks,
        ));
        self.score += self.config.points_per_asteroid;
        self.exploded_asteroids += 1;
        debug!(
            "asteroid destroyed at ({:.1}, {:.1}), score {:.1}",
            asteroid.center.x, asteroid.center.y, self.score
        );
    }

    /// Advance the ship, then keep it inside the field: the center is
    /// clamped to the boundary and the offending velocity component is
    /// reflected.
    pub fn move_ship(&mut self) {
        self.ship.advance();
        reflect_into(
            &self.boundary_x,
            &mut self.ship.center.x,
            &mut self.ship.velocity.dx,
        );
        reflect_into(
            &self.boundary_y,
            &mut self.ship.center.y,
            &mut self.ship.velocity.dy,
        );
    }

    pub fn move_asteroids(&mut self) {
        for asteroid in &mut self.asteroids {
            asteroid.advance();
        }
    }

    pub fn move_missiles(&mut self) {
        for missile in &mut self.missiles {
            missile.advance();
        }
    }

    pub fn move_explosions(&mut self) {
        for explosion in &mut self.explosions {
            explosion.advance();
        }
    }

    /// Drop asteroids whose centers left the field.
    pub fn trim_asteroids(&mut self) {
        let (bx, by) = (self.boundary_x.clone(), self.boundary_y.clone());
        self.asteroids
            .retain(|a| bx.contains(&a.center.x) && by.contains(&a.center.y));
    }

    /// Drop missiles whose centers left the field.
    pub fn trim_missiles(&mut self) {
        let (bx, by) = (self.boundary_x.clone(), self.boundary_y.clone());
        self.missiles
            .retain(|m| bx.contains(&m.center.x) && by.contains(&m.center.y));
    }

    /// Advance every explosion's lifetime budget by one tick and drop the
    /// exhausted ones.
    pub fn trim_explosions(&mut self) {
        for explosion in &mut self.explosions {
            if let Some(ttl) = explosion.ttl_ticks.as_mut() {
                *ttl = ttl.saturating_sub(1);
            }
        }
        self.explosions.retain(|e| e.ttl_ticks.map_or(true, |t| t > 0));
    }

    pub fn boost_ship_up(&mut self) {
        self.boost_ship(Vector2D::new(0.0, self.config.ship_boost));
    }

    pub fn boost_ship_down(&mut self) {
        self.boost_ship(Vector2D::new(0.0, -self.config.ship_boost));
    }

    pub fn boost_ship_left(&mut self) {
        self.boost_ship(Vector2D::new(-self.config.ship_boost, 0.0));
    }

    pub fn boost_ship_right(&mut self) {
        self.boost_ship(Vector2D::new(self.config.ship_boost, 0.0));
    }

    /// Apply a boost and clamp the ship's speed to the configured maximum,
    /// preserving direction.
    fn boost_ship(&mut self, acceleration: Vector2D) {
        self.ship.velocity = self.ship.velocity + acceleration;
        let speed = self.ship.velocity.magnitude();
        if speed > self.config.ship_max_speed {
            self.ship.velocity = self.ship.velocity * (self.config.ship_max_speed / speed);
        }
    }

    /// One collision pass over the combined object sequence.
    ///
    /// Unordered pairs are evaluated in snapshot order (outer index <
    /// inner index), so a given input state always resolves the same
    /// collision sequence. Objects consumed by a detonation are skipped
    /// for the rest of the pass; removals and explosion spawns are applied
    /// afterwards.
    pub fn handle_collisions(&mut self, restitution: f64) {
        let slots = self.collision_slots();
        let mut consumed = vec![false; slots.len()];
        // (missile, asteroid) collection indices, in detonation order.
        let mut detonations: Vec<(usize, usize)> = Vec::new();

        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                if consumed[i] || consumed[j] {
                    continue;
                }
                let mut a = self.get(slots[i]);
                let mut b = self.get(slots[j]);
                if !a.impacts(&b) {
                    continue;
                }
                collision::resolve(&mut a, &mut b, restitution);
                self.set(slots[i], a);
                self.set(slots[j], b);

                if collision::outcome(a.kind, b.kind) == Outcome::Detonate {
                    let pair = match (slots[i], slots[j]) {
                        (Slot::Missile(m), Slot::Asteroid(ast))
                        | (Slot::Asteroid(ast), Slot::Missile(m)) => Some((m, ast)),
                        _ => None,
                    };
                    if let Some(pair) = pair {
                        consumed[i] = true;
                        consumed[j] = true;
                        detonations.push(pair);
                    }
                }
            }
        }

        // Snapshot indices shift as pairs are consumed; adjust each by the
        // number of earlier removals below it.
        let mut removed_missiles: Vec<usize> = Vec::new();
        let mut removed_asteroids: Vec<usize> = Vec::new();
        for (missile, asteroid) in detonations {
            let missile_adj = missile - removed_missiles.iter().filter(|&&r| r < missile).count();
            let asteroid_adj =
                asteroid - removed_asteroids.iter().filter(|&&r| r < asteroid).count();
            self.generate_explosion(missile_adj, asteroid_adj);
            removed_missiles.push(missile);
            removed_asteroids.push(asteroid);
        }
    }

    fn collision_slots(&self) -> Vec<Slot> {
        let mut slots =
            Vec::with_capacity(1 + self.asteroids.len() + self.missiles.len() + self.explosions.len());
        slots.push(Slot::Ship);
        slots.extend((0..self.asteroids.len()).map(Slot::Asteroid));
        slots.extend((0..self.missiles.len()).map(Slot::Missile));
        slots.extend((0..self.explosions.len()).map(Slot::Explosion));
        slots
    }

    fn get(&self, slot: Slot) -> SpaceObject {
        match slot {
            Slot::Ship => self.ship,
            Slot::Asteroid(i) => self.asteroids[i],
            Slot::Missile(i) => self.missiles[i],
            Slot::Explosion(i) => self.explosions[i],
        }
    }

    fn set(&mut self, slot: Slot, object: SpaceObject) {
        match slot {
            Slot::Ship => self.ship = object,
            Slot::Asteroid(i) => self.asteroids[i] = object,
            Slot::Missile(i) => self.missiles[i] = object,
            Slot::Explosion(i) => self.explosions[i] = object,
        }
    }
}

/// Clamp `position` into `range`, reflecting `velocity` toward the
/// interior when the edge is crossed.
fn reflect_into(range: &RangeInclusive<f64>, position: &mut f64, velocity: &mut f64) {
    if *position < *range.start() {
        *position = *range.start();
        *velocity = velocity.abs();
    } else if *position > *range.end() {
        *position = *range.end();
        *velocity = -velocity.abs();
    }
}

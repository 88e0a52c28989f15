//! Astro Raiders - a headless asteroids arcade simulation
//!
//! Core modules:
//! - `physics`: immutable 2D vector/point value types
//! - `sim`: deterministic simulation (objects, field, collisions, engine)
//! - `ports`: collaborator seams (randomness, input, rendering)
//! - `scoreboard`: score records and leaderboard view
//! - `config`: resolved runtime parameters, validated at startup

pub mod config;
pub mod physics;
pub mod ports;
pub mod scoreboard;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use scoreboard::{ScoreRecord, Scoreboard};
pub use sim::{GameEngine, SpaceField};

/// Default simulation parameters
pub mod consts {
    /// Tick rate of the paced loop (Hz)
    pub const FRAME_RATE: u32 = 30;

    /// Field dimensions
    pub const FIELD_WIDTH: f64 = 120.0;
    pub const FIELD_HEIGHT: f64 = 80.0;

    /// Per-tick asteroid spawn threshold
    pub const ASTEROID_PROBABILITY: f64 = 0.2;
    /// Collision energy retention (0 inelastic, 1 elastic)
    pub const COEFFICIENT_RESTITUTION: f64 = 0.6;

    /// Ship defaults
    pub const SHIP_RADIUS: f64 = 2.0;
    pub const SHIP_MASS: f64 = 10.0;
    pub const SHIP_BOOST: f64 = 1.0;
    pub const SHIP_MAX_SPEED: f64 = 5.0;

    /// Missile defaults - launched straight up from the ship's nose
    pub const MISSILE_RADIUS: f64 = 1.0;
    pub const MISSILE_MASS: f64 = 1.0;
    pub const MISSILE_SPEED: f64 = 5.0;
    /// Gap between the ship's nose and a fresh missile, so a launch never
    /// collides with the shooter
    pub const MISSILE_LAUNCH_GAP: f64 = 0.1;

    /// Asteroid spawn ranges
    pub const ASTEROID_MIN_RADIUS: f64 = 1.0;
    pub const ASTEROID_MAX_RADIUS: f64 = 4.0;
    pub const ASTEROID_MIN_MASS: f64 = 5.0;
    pub const ASTEROID_MAX_MASS: f64 = 50.0;
    pub const ASTEROID_MIN_SPEED: f64 = 1.0;
    pub const ASTEROID_MAX_SPEED: f64 = 3.0;
    pub const ASTEROID_MAX_DRIFT: f64 = 0.5;

    /// Ticks an explosion stays visible
    pub const EXPLOSION_LIFETIME_TICKS: u32 = 50;
    /// Score per destroyed asteroid
    pub const POINTS_PER_ASTEROID: f64 = 10.0;
    /// Leaderboard entries kept
    pub const LEADERBOARD_SIZE: usize = 3;
}

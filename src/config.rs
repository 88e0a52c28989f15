//! Resolved runtime configuration
//!
//! The core never loads configuration itself; callers hand a fully
//! resolved [`GameConfig`] to the engine, which validates it once before
//! the loop starts. There is no process-wide config state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts;

/// All numeric parameters the simulation consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tick rate of the paced loop, Hz.
    pub frame_rate: u32,
    pub field_width: f64,
    pub field_height: f64,
    /// Per-tick spawn threshold in [0, 1]; 0 never spawns, 1 always does.
    pub asteroid_probability: f64,
    /// Collision energy retention in [0, 1]; 0 inelastic, 1 elastic.
    pub coefficient_restitution: f64,

    pub ship_radius: f64,
    pub ship_mass: f64,
    /// Velocity added per boost command.
    pub ship_boost: f64,
    /// Cap on the ship's speed magnitude.
    pub ship_max_speed: f64,

    pub missile_radius: f64,
    pub missile_mass: f64,
    pub missile_speed: f64,

    pub asteroid_min_radius: f64,
    pub asteroid_max_radius: f64,
    pub asteroid_min_mass: f64,
    pub asteroid_max_mass: f64,
    /// Downward speed range for freshly spawned asteroids.
    pub asteroid_min_speed: f64,
    pub asteroid_max_speed: f64,
    /// Horizontal drift bound, symmetric around zero.
    pub asteroid_max_drift: f64,

    /// Ticks an explosion stays in the field.
    pub explosion_lifetime_ticks: u32,
    /// Score awarded per destroyed asteroid.
    pub points_per_asteroid: f64,
    /// Entries kept in the leaderboard view.
    pub leaderboard_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: consts::FRAME_RATE,
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            asteroid_probability: consts::ASTEROID_PROBABILITY,
            coefficient_restitution: consts::COEFFICIENT_RESTITUTION,
            ship_radius: consts::SHIP_RADIUS,
            ship_mass: consts::SHIP_MASS,
            ship_boost: consts::SHIP_BOOST,
            ship_max_speed: consts::SHIP_MAX_SPEED,
            missile_radius: consts::MISSILE_RADIUS,
            missile_mass: consts::MISSILE_MASS,
            missile_speed: consts::MISSILE_SPEED,
            asteroid_min_radius: consts::ASTEROID_MIN_RADIUS,
            asteroid_max_radius: consts::ASTEROID_MAX_RADIUS,
            asteroid_min_mass: consts::ASTEROID_MIN_MASS,
            asteroid_max_mass: consts::ASTEROID_MAX_MASS,
            asteroid_min_speed: consts::ASTEROID_MIN_SPEED,
            asteroid_max_speed: consts::ASTEROID_MAX_SPEED,
            asteroid_max_drift: consts::ASTEROID_MAX_DRIFT,
            explosion_lifetime_ticks: consts::EXPLOSION_LIFETIME_TICKS,
            points_per_asteroid: consts::POINTS_PER_ASTEROID,
            leaderboard_size: consts::LEADERBOARD_SIZE,
        }
    }
}

impl GameConfig {
    /// Reject out-of-range parameters before the loop starts. Runtime code
    /// may assume a validated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::out_of_range("frame_rate", 0.0, "> 0"));
        }
        if self.field_width <= 0.0 {
            return Err(ConfigError::out_of_range(
                "field_width",
                self.field_width,
                "> 0",
            ));
        }
        if self.field_height <= 0.0 {
            return Err(ConfigError::out_of_range(
                "field_height",
                self.field_height,
                "> 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.asteroid_probability) {
            return Err(ConfigError::out_of_range(
                "asteroid_probability",
                self.asteroid_probability,
                "[0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.coefficient_restitution) {
            return Err(ConfigError::out_of_range(
                "coefficient_restitution",
                self.coefficient_restitution,
                "[0, 1]",
            ));
        }
        if self.ship_max_speed <= 0.0 {
            return Err(ConfigError::out_of_range(
                "ship_max_speed",
                self.ship_max_speed,
                "> 0",
            ));
        }
        if self.asteroid_min_radius > self.asteroid_max_radius {
            return Err(ConfigError::inverted_range("asteroid radius"));
        }
        if self.asteroid_min_mass > self.asteroid_max_mass {
            return Err(ConfigError::inverted_range("asteroid mass"));
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            return Err(ConfigError::inverted_range("asteroid speed"));
        }
        if self.explosion_lifetime_ticks == 0 {
            return Err(ConfigError::out_of_range(
                "explosion_lifetime_ticks",
                0.0,
                "> 0",
            ));
        }
        Ok(())
    }
}

/// Startup misconfiguration. Fatal before the loop; never raised mid-tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    InvertedRange {
        name: &'static str,
    },
}

impl ConfigError {
    fn out_of_range(name: &'static str, value: f64, expected: &'static str) -> Self {
        ConfigError::OutOfRange {
            name,
            value,
            expected,
        }
    }

    fn inverted_range(name: &'static str) -> Self {
        ConfigError::InvertedRange { name }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "'{name}' = {value} is outside expected range {expected}"),
            ConfigError::InvertedRange { name } => {
                write!(f, "{name} range has min above max")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected probability source only
//! - Stable object order (ship, asteroids, missiles, explosions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod field;
pub mod object;

pub use collision::{Outcome, outcome, resolve};
pub use engine::GameEngine;
pub use field::SpaceField;
pub use object::{ObjectKind, SpaceObject};

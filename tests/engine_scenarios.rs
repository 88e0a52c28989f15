//! End-to-end scenarios driving the engine through its public surface.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use astro_raiders::GameConfig;
use astro_raiders::physics::{Point2D, Vector2D};
use astro_raiders::ports::{
    Controller, PcgGenerator, PlayerCommand, RandomGenerator, Visualizer,
};
use astro_raiders::sim::{GameEngine, ObjectKind, SpaceField, SpaceObject};

/// Fixed probability, midpoint range samples.
struct ConstantGenerator(f64);

impl RandomGenerator for ConstantGenerator {
    fn generate_probability(&mut self) -> f64 {
        self.0
    }

    fn generate_in_range(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

struct ScriptedController {
    script: VecDeque<Option<PlayerCommand>>,
}

impl ScriptedController {
    fn new(script: Vec<Option<PlayerCommand>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl Controller for ScriptedController {
    fn next_player_command(&mut self) -> Option<PlayerCommand> {
        self.script.pop_front().flatten()
    }
}

/// Counts renders through a shared cell so the test can observe the
/// engine-owned visualizer.
struct CountingVisualizer {
    renders: Rc<Cell<usize>>,
}

impl Visualizer for CountingVisualizer {
    fn render_space_field(&mut self, _field: &SpaceField) {
        self.renders.set(self.renders.get() + 1);
    }
}

fn asteroid(x: f64, y: f64, vx: f64, vy: f64) -> SpaceObject {
    SpaceObject::new(
        ObjectKind::Asteroid,
        Point2D::new(x, y),
        Vector2D::new(vx, vy),
        2.0,
        10.0,
    )
}

fn missile(x: f64, y: f64, vy: f64) -> SpaceObject {
    SpaceObject::new(
        ObjectKind::Missile,
        Point2D::new(x, y),
        Vector2D::new(0.0, vy),
        1.0,
        1.0,
    )
}

#[test]
fn pause_from_tick_three_freezes_updates_but_renders_all_ten_ticks() {
    let renders = Rc::new(Cell::new(0));
    let config = GameConfig {
        asteroid_probability: 1.0,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(
        config,
        ConstantGenerator(0.5),
        ScriptedController::new(vec![None, None, Some(PlayerCommand::PauseGame)]),
        CountingVisualizer {
            renders: renders.clone(),
        },
    )
    .expect("config is valid");

    engine.execute_bounded(10);

    assert_eq!(renders.get(), 10);
    assert!(!engine.is_playing());
    // One spawn per running update; ticks 3..10 are frozen.
    assert_eq!(engine.field().asteroids.len(), 2);
}

#[test]
fn missile_and_asteroid_annihilate_into_explosion_and_score() {
    let config = GameConfig {
        asteroid_probability: 0.0,
        ..GameConfig::default()
    };
    let points = config.points_per_asteroid;
    let mut engine = GameEngine::new(
        config,
        ConstantGenerator(0.5),
        ScriptedController::new(Vec::new()),
        CountingVisualizer {
            renders: Rc::new(Cell::new(0)),
        },
    )
    .expect("config is valid");

    // Overlapping radii, opposite-facing velocities.
    engine.field_mut().asteroids.push(asteroid(30.0, 41.0, 0.0, -1.0));
    engine.field_mut().missiles.push(missile(30.0, 39.0, 5.0));

    engine.tick();

    let field = engine.field();
    assert!(field.asteroids.is_empty());
    assert!(field.missiles.is_empty());
    assert_eq!(field.explosions.len(), 1);
    assert_eq!(field.score(), points);
    assert_eq!(field.exploded_asteroids(), 1);
}

#[test]
fn explosion_expires_after_its_tick_budget() {
    let config = GameConfig {
        asteroid_probability: 0.0,
        explosion_lifetime_ticks: 3,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(
        config,
        ConstantGenerator(0.5),
        ScriptedController::new(Vec::new()),
        CountingVisualizer {
            renders: Rc::new(Cell::new(0)),
        },
    )
    .expect("config is valid");

    engine.field_mut().asteroids.push(asteroid(30.0, 41.0, 0.0, -1.0));
    engine.field_mut().missiles.push(missile(30.0, 39.0, 5.0));

    // Detonation tick also counts one tick of explosion lifetime.
    engine.tick();
    assert_eq!(engine.field().explosions.len(), 1);

    engine.execute_bounded(2);
    assert!(engine.field().explosions.is_empty());
}

#[test]
fn identical_seeds_replay_identical_games() {
    let run = |seed: u64| {
        let mut engine = GameEngine::new(
            GameConfig::default(),
            PcgGenerator::from_seed(seed),
            ScriptedController::new(vec![
                Some(PlayerCommand::MoveShipRight),
                Some(PlayerCommand::LaunchMissile),
                None,
                Some(PlayerCommand::MoveShipUp),
            ]),
            CountingVisualizer {
                renders: Rc::new(Cell::new(0)),
            },
        )
        .expect("config is valid");
        engine.execute_bounded(200);
        (
            engine.field().ship,
            engine.field().asteroids.clone(),
            engine.field().missiles.clone(),
            engine.field().score(),
        )
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn launch_and_let_missile_leave_the_field() {
    let config = GameConfig {
        asteroid_probability: 0.0,
        ..GameConfig::default()
    };
    let field_height = config.field_height;
    let missile_speed = config.missile_speed;
    let mut engine = GameEngine::new(
        config,
        ConstantGenerator(0.5),
        ScriptedController::new(vec![Some(PlayerCommand::LaunchMissile)]),
        CountingVisualizer {
            renders: Rc::new(Cell::new(0)),
        },
    )
    .expect("config is valid");

    let ticks_to_exit = (field_height / missile_speed).ceil() as usize + 2;
    engine.execute_bounded(ticks_to_exit);

    assert!(engine.field().missiles.is_empty());
}

//! Astro Raiders entry point
//!
//! Headless demo run: a seeded engine driven by a scripted controller,
//! rendering through a log-based visualizer. Usage:
//!
//!     astro-raiders [seed] [ticks]
//!
//! Runs the bounded loop and prints the leaderboard as JSON.

use log::info;

use astro_raiders::GameConfig;
use astro_raiders::ports::{Controller, PcgGenerator, PlayerCommand, Visualizer};
use astro_raiders::sim::{GameEngine, SpaceField};

/// Cycles a fixed command script; `None` slots model idle ticks.
struct ScriptedController {
    script: Vec<Option<PlayerCommand>>,
    cursor: usize,
}

impl ScriptedController {
    fn new(script: Vec<Option<PlayerCommand>>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Controller for ScriptedController {
    fn next_player_command(&mut self) -> Option<PlayerCommand> {
        if self.script.is_empty() {
            return None;
        }
        let command = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        command
    }
}

/// Logs a one-line field summary every `every` ticks.
struct LogVisualizer {
    every: u64,
    ticks: u64,
}

impl Visualizer for LogVisualizer {
    fn render_space_field(&mut self, field: &SpaceField) {
        self.ticks += 1;
        if self.ticks % self.every == 0 {
            info!(
                "tick {:>5}  score {:>7.1}  asteroids {:>3}  missiles {:>3}  explosions {:>2}",
                self.ticks,
                field.score(),
                field.asteroids.len(),
                field.missiles.len(),
                field.explosions.len(),
            );
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let ticks: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let script = vec![
        Some(PlayerCommand::MoveShipRight),
        None,
        Some(PlayerCommand::LaunchMissile),
        None,
        Some(PlayerCommand::MoveShipLeft),
        None,
        Some(PlayerCommand::LaunchMissile),
        None,
    ];

    let mut engine = match GameEngine::new(
        GameConfig::default(),
        PcgGenerator::from_seed(seed),
        ScriptedController::new(script),
        LogVisualizer { every: 30, ticks: 0 },
    ) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("running {ticks} ticks with seed {seed}");
    engine.execute_bounded(ticks);

    match serde_json::to_string_pretty(&engine.scoreboard().leaderboard()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize leaderboard: {err}"),
    }
}

//! Fixed-rate game loop
//!
//! One tick = read at most one command, update the simulation (skipped
//! while paused), render. The unbounded loop paces itself to the
//! configured frame rate by sleeping whatever remains of the frame
//! period; a tick that overruns simply starts the next one immediately.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::ports::{Controller, PlayerCommand, RandomGenerator, Visualizer};
use crate::scoreboard::Scoreboard;

use super::field::SpaceField;

pub struct GameEngine<R, C, V> {
    config: GameConfig,
    field: SpaceField,
    generator: R,
    controller: C,
    visualizer: V,
    scoreboard: Scoreboard,
    playing: bool,
}

impl<R, C, V> GameEngine<R, C, V>
where
    R: RandomGenerator,
    C: Controller,
    V: Visualizer,
{
    /// Validates the config and sets up an empty field. Starts Running.
    pub fn new(
        config: GameConfig,
        generator: R,
        controller: C,
        visualizer: V,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = SpaceField::new(&config);
        let mut scoreboard = Scoreboard::new(config.leaderboard_size);
        scoreboard.open_run(unix_time_ms());
        info!(
            "engine ready: {}x{} field, {} Hz",
            config.field_width, config.field_height, config.frame_rate
        );
        Ok(Self {
            config,
            field,
            generator,
            controller,
            visualizer,
            scoreboard,
            playing: true,
        })
    }

    pub fn field(&self) -> &SpaceField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut SpaceField {
        &mut self.field
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Run the loop indefinitely, pacing each tick to the frame period.
    pub fn execute(&mut self) {
        let frame_period = Duration::from_secs(1) / self.config.frame_rate;
        loop {
            let started = Instant::now();
            self.tick();
            if let Some(remaining) = frame_period.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    /// Run exactly `max_iterations` unpaced ticks (deterministic testing).
    pub fn execute_bounded(&mut self, max_iterations: usize) {
        for _ in 0..max_iterations {
            self.tick();
        }
    }

    pub fn tick(&mut self) {
        self.process_player_input();
        self.update_space_objects();
        self.render_space_field();
    }

    /// Pull at most one command; an empty poll is a no-op.
    pub fn process_player_input(&mut self) {
        if let Some(command) = self.controller.next_player_command() {
            match command {
                PlayerCommand::MoveShipUp => self.field.boost_ship_up(),
                PlayerCommand::MoveShipDown => self.field.boost_ship_down(),
                PlayerCommand::MoveShipLeft => self.field.boost_ship_left(),
                PlayerCommand::MoveShipRight => self.field.boost_ship_right(),
                PlayerCommand::LaunchMissile => self.field.generate_missile(),
                PlayerCommand::PauseGame => {
                    self.playing = !self.playing;
                    info!("game {}", if self.playing { "resumed" } else { "paused" });
                }
            }
        }
    }

    /// Collide, move, trim, maybe spawn, publish score. Skipped entirely
    /// while paused.
    pub fn update_space_objects(&mut self) {
        if !self.playing {
            return;
        }
        self.field
            .handle_collisions(self.config.coefficient_restitution);
        self.move_space_objects();
        self.trim_space_objects();
        self.generate_asteroids();
        self.publish_score();
    }

    fn move_space_objects(&mut self) {
        self.field.move_ship();
        self.field.move_asteroids();
        self.field.move_missiles();
        self.field.move_explosions();
    }

    fn trim_space_objects(&mut self) {
        self.field.trim_asteroids();
        self.field.trim_missiles();
        self.field.trim_explosions();
    }

    /// Draw one probability per update; spawn when it falls below the
    /// configured threshold, so 0 never spawns and 1 always does.
    pub fn generate_asteroids(&mut self) {
        let probability = self.generator.generate_probability();
        if probability < self.config.asteroid_probability {
            self.field.generate_asteroid(&mut self.generator);
            debug!("{} asteroids live", self.field.asteroids.len());
        }
    }

    fn publish_score(&mut self) {
        self.scoreboard.update_current(
            unix_time_ms(),
            self.field.score(),
            self.field.exploded_asteroids(),
        );
    }

    /// Hand the current field to the visualizer; runs paused or not.
    pub fn render_space_field(&mut self) {
        self.visualizer.render_space_field(&self.field);
    }
}

fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

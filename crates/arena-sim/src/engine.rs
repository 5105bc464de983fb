//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! with randomness and time injected, enabling deterministic testing.

use std::collections::VecDeque;

use tracing::{debug, info};

use arena_core::commands::PlayerCommand;
use arena_core::config::{ArenaConfig, ConfigError};
use arena_core::events::SimEvent;
use arena_core::input::InputVector;
use arena_core::state::{GameStateSnapshot, ScoreView};
use arena_core::types::SimTime;

use crate::clock::{FrameClock, TimeSource};
use crate::random::{RandomSource, SeededRandom};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::snapshot::FrameInfo;
use crate::world_setup;

/// The simulation engine. Owns the entity store and all sim state.
pub struct SimulationEngine {
    config: ArenaConfig,
    store: EntityStore,
    time: SimTime,
    paused: bool,
    rng: Box<dyn RandomSource>,
    clock: Box<dyn TimeSource>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    score: ScoreView,
    latest: GameStateSnapshot,
}

impl SimulationEngine {
    /// Create an engine seeded from `config.seed` and driven by frame time.
    ///
    /// The config is used as-is; use `try_new` for configs from outside.
    pub fn new(config: ArenaConfig) -> Self {
        let rng = Box::new(SeededRandom::new(config.seed));
        Self::with_sources(config, rng, Box::new(FrameClock::new()))
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine with explicit randomness and time sources.
    pub fn with_sources(
        config: ArenaConfig,
        mut rng: Box<dyn RandomSource>,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        let mut events = Vec::new();
        let store = world_setup::setup_arena(&config, rng.as_mut(), &mut events);

        info!(
            seed = config.seed,
            hostiles = config.initial_hostiles,
            policy = ?config.spawn_policy,
            replenish = ?config.replenish,
            "arena started"
        );

        let mut engine = Self {
            config,
            store,
            time: SimTime::default(),
            paused: false,
            rng,
            clock,
            command_queue: VecDeque::new(),
            events,
            score: ScoreView::default(),
            latest: GameStateSnapshot::default(),
        };
        engine.latest = engine.build_snapshot(false, Vec::new());
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_ms` and return the resulting snapshot.
    ///
    /// While paused only pause controls are applied; other commands stay
    /// queued until the simulation resumes, and no system runs.
    pub fn tick(&mut self, dt_ms: f64, input: InputVector) -> GameStateSnapshot {
        self.process_commands();

        let mut moving = false;
        if !self.paused {
            let dt_ms = dt_ms.max(0.0);
            self.clock.advance(dt_ms);
            self.time.advance(dt_ms);
            moving = self.run_systems(&input);
        }

        let events = std::mem::take(&mut self.events);
        self.latest = self.build_snapshot(moving, events);
        self.latest.clone()
    }

    /// The snapshot produced by the most recent tick.
    pub fn snapshot(&self) -> &GameStateSnapshot {
        &self.latest
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreView {
        &self.score
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable access for staging scenarios between ticks.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Process queued commands in order.
    ///
    /// Pause controls always apply. Other commands that arrive while paused
    /// are held, in order, and apply once a later control resumes the run.
    fn process_commands(&mut self) {
        let mut held = VecDeque::new();
        while let Some(command) = self.command_queue.pop_front() {
            if self.paused && !is_pause_control(&command) {
                held.push_back(command);
            } else {
                self.handle_command(command);
            }
        }

        if self.paused {
            self.command_queue = held;
        } else {
            for command in held {
                self.handle_command(command);
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => self.set_paused(true),
            PlayerCommand::Resume => self.set_paused(false),
            PlayerCommand::TogglePause => self.set_paused(!self.paused),
            PlayerCommand::SetSpell { spell } => {
                self.store.player_mut().spell = spell;
                debug!(?spell, "spell changed");
            }
            PlayerCommand::Equip { item } => {
                let replaced =
                    systems::equipment::equip(&mut self.store.player_mut().equipment, item);
                debug!(?item, ?replaced, "item equipped");
            }
            PlayerCommand::Unequip { slot } => {
                let removed = systems::equipment::unequip(&mut self.store.player_mut().equipment, slot);
                debug!(?slot, ?removed, "slot emptied");
            }
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            info!(paused, tick = self.time.tick, "pause state changed");
        }
    }

    /// Run all systems in order. Returns whether the player moved.
    fn run_systems(&mut self, input: &InputVector) -> bool {
        // 1. Movement (player, then hostiles toward the new player position)
        let moving = systems::movement::run(&mut self.store, input, &self.config);

        // 2. Collision (damage, projectile and hostile removal)
        let kills = systems::collision::resolve_collisions(
            &mut self.store,
            self.config.hit_radius,
            &mut self.events,
        );

        // 3. Targeting (dead hostiles are already gone)
        if let Some(event) =
            systems::targeting::try_auto_fire(&mut self.store, self.clock.now_ms(), &self.config)
        {
            self.score.shots_fired += 1;
            self.events.push(event);
        }

        // 4. Kill reactions: replenishment, then loot
        for kill in &kills {
            self.score.kills += 1;
            if kill.elite {
                self.score.elite_kills += 1;
            }
            systems::spawner::on_hostile_killed(
                &mut self.store,
                self.rng.as_mut(),
                &self.config,
                &mut self.events,
            );
            if systems::loot::on_hostile_killed(
                &mut self.store,
                self.rng.as_mut(),
                &self.config,
                kill.position,
                &mut self.events,
            )
            .is_some()
            {
                self.score.drops_created += 1;
            }
        }

        // 5. Projectile flight and lifetime cleanup
        systems::lifetime::run(&mut self.store);

        moving
    }

    fn build_snapshot(&self, moving: bool, events: Vec<SimEvent>) -> GameStateSnapshot {
        let frame = FrameInfo {
            time: self.time,
            paused: self.paused,
            moving,
        };
        systems::snapshot::build_snapshot(&self.store, &frame, events, &self.score, &self.config)
    }
}

fn is_pause_control(command: &PlayerCommand) -> bool {
    matches!(
        command,
        PlayerCommand::Pause | PlayerCommand::Resume | PlayerCommand::TogglePause
    )
}

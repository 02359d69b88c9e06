//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the session `WorldState`, processes input events,
//! runs all systems behind the crash guard, and produces `WorldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use laststand_core::commands::{InputEvent, InputFrame, MovementKeys};
use laststand_core::constants::TICK_RATE;
use laststand_core::enums::GameMode;
use laststand_core::state::{Resources, WorldSnapshot};
use laststand_core::types::{GameClock, PlayBounds, Position, SimTime};

use crate::crash_guard::{self, Fault, TickOutcome};
use crate::error::SimError;
use crate::session::WorldState;
use crate::state_machine::{self, ModeEvent, Transition};
use crate::systems;
use crate::systems::spawn_director::SpawnConfig;
use crate::world_setup;

/// Configuration for the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same simulation.
    pub seed: u64,
    /// Fixed ticks per second.
    pub tick_rate: u32,
    pub bounds: PlayBounds,
    pub spawn: SpawnConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            bounds: PlayBounds::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl SimConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }
}

/// The simulation engine. Owns the session and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    state: WorldState,
    rng: ChaCha8Rng,
    event_queue: VecDeque<InputEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    quit_requested: bool,
    sessions_started: u32,
}

impl SimulationEngine {
    /// Create a new engine in the menu.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: WorldState::new(config.bounds),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            event_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            quit_requested: false,
            sessions_started: 0,
        }
    }

    /// Queue an input event for processing at the next tick boundary.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.event_queue.push_back(event);
    }

    /// Queue multiple events.
    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.event_queue.extend(events);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Never fails: any fault raised while processing the tick moves the
    /// game to `Crashed` and the snapshot carries the message.
    pub fn tick(&mut self, input: &InputFrame) -> WorldSnapshot {
        self.event_queue.extend(input.events.iter().copied());

        let outcome = crash_guard::run(|| self.guarded_tick(&input.keys, input.cursor));
        if let TickOutcome::Faulted(fault) = outcome {
            self.apply_fault(fault);
        }

        let events = std::mem::take(&mut self.state.events);
        systems::snapshot::build_snapshot(&self.state, events)
    }

    /// Build a snapshot without advancing.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.state, Vec::new())
    }

    /// Force the Crashed mode from outside the tick, e.g. after the host
    /// caught a panic.
    pub fn force_crash(&mut self, message: impl Into<String>) {
        self.apply_fault(Fault::external(message));
    }

    /// Whether a quit event has been processed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn clock(&self) -> GameClock {
        self.state.clock
    }

    pub fn resources(&self) -> Resources {
        self.state.resources
    }

    pub fn wave(&self) -> u32 {
        self.state.wave
    }

    pub fn error_message(&self) -> &str {
        &self.state.error_message
    }

    /// Number of sessions started since the engine was created.
    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &hecs::World {
        &self.state.world
    }

    /// Get a mutable reference to the session (for tests).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Place a zombie at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_zombie(
        &mut self,
        tier: laststand_core::enums::ZombieTier,
        position: Position,
    ) -> hecs::Entity {
        world_setup::spawn_zombie(&mut self.state, tier, position).unwrap()
    }

    /// Everything that runs inside the crash guard.
    fn guarded_tick(&mut self, keys: &MovementKeys, cursor: Position) -> Result<(), SimError> {
        let fire_requested = self.process_events()?;
        if state_machine::simulates(self.state.mode) {
            self.run_systems(keys, cursor, fire_requested)?;
        }
        Ok(())
    }

    /// Process all queued events. Returns whether a shot was requested.
    fn process_events(&mut self) -> Result<bool, SimError> {
        let mut fire_requested = false;
        while let Some(event) = self.event_queue.pop_front() {
            match event {
                InputEvent::Quit => {
                    info!("quit requested");
                    self.quit_requested = true;
                }
                InputEvent::Start => self.apply_mode_event(ModeEvent::Start)?,
                InputEvent::TogglePause => self.apply_mode_event(ModeEvent::TogglePause)?,
                InputEvent::Fire => {
                    if state_machine::accepts_fire(self.state.mode) {
                        fire_requested = true;
                    }
                }
            }
        }
        Ok(fire_requested)
    }

    /// Resolve a mode event through the transition table and apply it.
    fn apply_mode_event(&mut self, event: ModeEvent) -> Result<(), SimError> {
        match state_machine::transition(self.state.mode, event) {
            Transition::Stay => {}
            Transition::Enter(mode) => {
                info!(from = ?self.state.mode, to = ?mode, "mode transition");
                self.state.mode = mode;
            }
            Transition::Initialize => self.start_session()?,
        }
        Ok(())
    }

    /// Replace the session with a freshly populated one and enter Playing.
    fn start_session(&mut self) -> Result<(), SimError> {
        let mut state = WorldState::new(self.config.bounds);
        world_setup::spawn_player(&mut state)?;
        let zombies = systems::spawn_director::initial_spawn(&mut state, &mut self.rng, &self.config.spawn)?;
        state.mode = GameMode::Playing;

        info!(from = ?self.state.mode, zombies, policy = ?self.config.spawn.policy, "session started");
        self.state = state;
        self.despawn_buffer.clear();
        self.sessions_started += 1;
        Ok(())
    }

    /// Record a caught fault and enter Crashed.
    fn apply_fault(&mut self, fault: Fault) {
        if let Transition::Enter(mode) = state_machine::transition(self.state.mode, ModeEvent::Fault) {
            info!(from = ?self.state.mode, to = ?mode, "mode transition");
            self.state.mode = mode;
        }
        self.state.error_message = fault.message;
        // Pending input is dropped, but a quit still ends the host loop.
        if self.event_queue.contains(&InputEvent::Quit) {
            info!("quit requested");
            self.quit_requested = true;
        }
        self.event_queue.clear();
        self.despawn_buffer.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, keys: &MovementKeys, cursor: Position, fire_requested: bool) -> Result<(), SimError> {
        let dt = self.config.dt();
        let now = self.state.time.tick;

        // 1. Day/night clock
        self.state.clock.advance(dt);
        // 2. Weapon fire
        if fire_requested {
            let result = systems::weapons::fire(&mut self.state, cursor, now, dt)?;
            debug!(tick = now, ?result, "fire request");
        }
        // 3. Pursuit AI
        systems::pursuit::run(&mut self.state)?;
        // 4. Integration
        systems::movement::steer_player(&mut self.state.world, keys);
        systems::movement::run(&mut self.state.world, dt, &self.state.bounds)?;
        // 5. Combat
        let report = systems::combat::run(&mut self.state, dt, &mut self.despawn_buffer)?;
        // 6. Compaction
        systems::cleanup::run(&mut self.state.world, &mut self.despawn_buffer);

        self.state.time.advance(dt);

        if report.player_dead {
            info!(day = self.state.clock.day, kills = self.state.score.zombies_killed, "player downed");
            return self.apply_mode_event(ModeEvent::PlayerDied);
        }

        // 7. Spawning
        systems::spawn_director::run(&mut self.state, &mut self.rng, &self.config.spawn)?;
        Ok(())
    }
}

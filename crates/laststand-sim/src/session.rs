//! Per-session world state.
//!
//! A `WorldState` lives for exactly one play session. Starting or restarting
//! replaces it wholesale; nothing is ever partially reset.

use hecs::World;

use laststand_core::components::EntityId;
use laststand_core::enums::GameMode;
use laststand_core::events::GameEvent;
use laststand_core::state::{Resources, ScoreView};
use laststand_core::types::{GameClock, PlayBounds, SimTime};

use crate::error::SimError;

/// Everything one play session owns.
pub struct WorldState {
    pub mode: GameMode,
    pub clock: GameClock,
    pub time: SimTime,
    pub resources: Resources,
    /// Set when the mode is Crashed.
    pub error_message: String,
    pub bounds: PlayBounds,
    /// Live entities. Kinds are partitioned by their marker component.
    pub world: World,
    /// Current wave index; starts at 1 and never decreases.
    pub wave: u32,
    pub score: ScoreView,
    /// Events raised this tick, drained into the snapshot.
    pub events: Vec<GameEvent>,
    /// The player's hecs handle, once spawned.
    pub player: Option<hecs::Entity>,
    next_entity_id: u32,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            mode: GameMode::Menu,
            clock: GameClock::default(),
            time: SimTime::default(),
            resources: Resources::default(),
            error_message: String::new(),
            bounds: PlayBounds::default(),
            world: World::new(),
            wave: 1,
            score: ScoreView::default(),
            events: Vec::new(),
            player: None,
            next_entity_id: 1,
        }
    }
}

impl WorldState {
    /// A fresh session in the given bounds, not yet populated.
    pub fn new(bounds: PlayBounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Issue the next session-unique entity id.
    pub fn allocate_id(&mut self) -> Result<EntityId, SimError> {
        let id = self.next_entity_id;
        self.next_entity_id = id.checked_add(1).ok_or(SimError::IdsExhausted)?;
        Ok(EntityId(id))
    }

    /// Player handle, or a fault if the session has none.
    pub fn player_entity(&self) -> Result<hecs::Entity, SimError> {
        self.player.ok_or(SimError::MissingPlayer)
    }
}

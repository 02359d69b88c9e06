//! Simulation faults.
//!
//! Every fault raised while running a tick bubbles up as a `SimError` to the
//! crash guard. Subsystems never swallow these themselves.

use laststand_ai::pursuit::PursuitError;
use laststand_core::components::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Error spawning zombies: invalid tier weights")]
    InvalidTierWeights {
        #[source]
        source: rand::distributions::WeightedError,
    },

    #[error("Error spawning zombies: no tier for weight index {0}")]
    UnknownTier(usize),

    #[error("Error spawning zombies: spawn chance {0} is not a probability")]
    InvalidSpawnChance(f64),

    #[error("Error spawning zombies: wave {wave} size overflows (base rate {base_rate})")]
    SpawnCount { wave: u32, base_rate: u32 },

    #[error("AI error for zombie {id:?}: {source}")]
    Pursuit {
        id: EntityId,
        #[source]
        source: PursuitError,
    },

    #[error("No player in a playing session")]
    MissingPlayer,

    #[error("Entity {id:?} moved to a non-finite position")]
    NonFinitePosition { id: EntityId },

    #[error("Entity store error: {0}")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),

    #[error("Entity store error: {0}")]
    Component(#[from] hecs::ComponentError),

    #[error("Entity id space exhausted")]
    IdsExhausted,
}

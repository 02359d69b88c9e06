//! Cleanup system: compacts the world by despawning everything marked this tick.
//!
//! Resolvers only mark entities (push their handle into the despawn buffer),
//! so iteration stays stable while they run. This single pass removes them.

use hecs::{Entity, World};

/// Despawn every buffered entity exactly once. Returns how many were removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.sort_unstable_by_key(|entity| entity.to_bits());
    despawn_buffer.dedup();

    let mut removed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            removed += 1;
        }
    }
    removed
}

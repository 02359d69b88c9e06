//! Proportional pursuit steering.
//!
//! Each tick a zombie heads straight at the player at its tier speed.
//! No path-finding, obstacle avoidance, or target prediction.

use glam::DVec2;

use laststand_core::types::{Position, Velocity};

/// Input to the pursuit rule for a single zombie.
pub struct PursuitContext {
    pub position: Position,
    pub target: Position,
    pub speed: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PursuitError {
    #[error("non-finite position ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },

    #[error("non-finite target ({x}, {y})")]
    NonFiniteTarget { x: f64, y: f64 },

    #[error("invalid pursuit speed {0}")]
    InvalidSpeed(f64),

    #[error("pursuit vector overflowed")]
    Overflow,
}

/// Compute the pursuit velocity toward `ctx.target`.
///
/// Returns exactly zero when the zombie already sits on the target.
pub fn evaluate(ctx: &PursuitContext) -> Result<Velocity, PursuitError> {
    if !ctx.position.is_finite() {
        return Err(PursuitError::NonFinitePosition {
            x: ctx.position.x,
            y: ctx.position.y,
        });
    }
    if !ctx.target.is_finite() {
        return Err(PursuitError::NonFiniteTarget {
            x: ctx.target.x,
            y: ctx.target.y,
        });
    }
    if !ctx.speed.is_finite() || ctx.speed < 0.0 {
        return Err(PursuitError::InvalidSpeed(ctx.speed));
    }

    let to_target: DVec2 = ctx.target.to_dvec2() - ctx.position.to_dvec2();
    let distance = to_target.length();
    if distance == 0.0 {
        return Ok(Velocity::zero());
    }

    let velocity = Velocity::from(to_target / distance * ctx.speed);
    if !velocity.is_finite() {
        return Err(PursuitError::Overflow);
    }
    Ok(velocity)
}

//! The single fault boundary around each tick.
//!
//! The guarded tick returns `Result<(), SimError>`; this module turns an
//! error into a `Fault` carrying a short message for the CRASHED screen and
//! the full source chain for the log.

use std::error::Error;
use std::fmt::Write as _;

use tracing::error;

use crate::error::SimError;

/// A caught simulation fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// One-line description shown to the player.
    pub message: String,
    /// Message plus every `source()` in the chain.
    pub detail: String,
}

/// Result of one guarded tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Completed,
    Faulted(Fault),
}

impl Fault {
    pub fn from_error(err: &SimError) -> Self {
        let message = err.to_string();
        let mut detail = message.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(detail, "\n  caused by: {cause}");
            source = cause.source();
        }
        Self { message, detail }
    }

    /// A fault raised outside the simulation, e.g. a panic caught by the host.
    pub fn external(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            detail: message.clone(),
            message,
        }
    }
}

/// Run `tick` and convert any error into a logged `Fault`.
pub fn run<F>(tick: F) -> TickOutcome
where
    F: FnOnce() -> Result<(), SimError>,
{
    match tick() {
        Ok(()) => TickOutcome::Completed,
        Err(err) => {
            let fault = Fault::from_error(&err);
            error!(detail = %fault.detail, "simulation fault");
            TickOutcome::Faulted(fault)
        }
    }
}

#[cfg(test)]
mod tests {
    use laststand_ai::pursuit::PursuitError;
    use laststand_core::components::EntityId;

    use super::*;

    #[test]
    fn test_ok_tick_completes() {
        assert_eq!(run(|| Ok(())), TickOutcome::Completed);
    }

    #[test]
    fn test_error_becomes_fault_with_chain() {
        let outcome = run(|| {
            Err(SimError::Pursuit {
                id: EntityId(3),
                source: PursuitError::InvalidSpeed(-1.0),
            })
        });
        let TickOutcome::Faulted(fault) = outcome else {
            panic!("expected a fault");
        };
        assert!(fault.message.starts_with("AI error for zombie"));
        assert!(fault.detail.contains("caused by: invalid pursuit speed -1"));
    }

    #[test]
    fn test_missing_player_message() {
        let TickOutcome::Faulted(fault) = run(|| Err(SimError::MissingPlayer)) else {
            panic!("expected a fault");
        };
        assert_eq!(fault.message, "No player in a playing session");
        assert_eq!(fault.detail, fault.message);
    }
}

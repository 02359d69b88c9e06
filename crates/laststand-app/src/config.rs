//! Host configuration read from the environment.
//!
//! There are no CLI flags. Each variable is optional; an invalid value is
//! reported as a `ConfigError` and the default is kept.

use serde::{Deserialize, Serialize};

use laststand_sim::engine::SimConfig;
use laststand_sim::systems::spawn_director::SpawnPolicy;

pub const SEED_VAR: &str = "LASTSTAND_SEED";
pub const SPAWN_POLICY_VAR: &str = "LASTSTAND_SPAWN_POLICY";
pub const MAX_FRAMES_VAR: &str = "LASTSTAND_MAX_FRAMES";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid seed")]
    InvalidSeed { var: &'static str, value: String },

    #[error("{var}={value:?} is not a spawn policy (expected trickle or wave)")]
    UnknownSpawnPolicy { var: &'static str, value: String },

    #[error("{var}={value:?} is not a frame count")]
    InvalidFrameCount { var: &'static str, value: String },
}

/// Which spawn director policy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnPolicyName {
    #[default]
    Trickle,
    Wave,
}

impl SpawnPolicyName {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trickle" => Some(SpawnPolicyName::Trickle),
            "wave" | "waves" => Some(SpawnPolicyName::Wave),
            _ => None,
        }
    }

    fn to_policy(self) -> SpawnPolicy {
        match self {
            SpawnPolicyName::Trickle => SpawnPolicy::default(),
            SpawnPolicyName::Wave => SpawnPolicy::waves(),
        }
    }
}

/// Host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub seed: u64,
    pub spawn_policy: SpawnPolicyName,
    /// Frames after which the autopilot quits. `None` runs until killed.
    pub max_frames: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            spawn_policy: SpawnPolicyName::default(),
            max_frames: None,
        }
    }
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup. Returns the config plus every value
    /// that was rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = lookup(SEED_VAR) {
            match value.trim().parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => errors.push(ConfigError::InvalidSeed { var: SEED_VAR, value }),
            }
        }

        if let Some(value) = lookup(SPAWN_POLICY_VAR) {
            match SpawnPolicyName::parse(&value) {
                Some(policy) => config.spawn_policy = policy,
                None => errors.push(ConfigError::UnknownSpawnPolicy {
                    var: SPAWN_POLICY_VAR,
                    value,
                }),
            }
        }

        if let Some(value) = lookup(MAX_FRAMES_VAR) {
            match value.trim().parse() {
                Ok(frames) => config.max_frames = Some(frames),
                Err(_) => errors.push(ConfigError::InvalidFrameCount {
                    var: MAX_FRAMES_VAR,
                    value,
                }),
            }
        }

        (config, errors)
    }

    /// Engine configuration for this host setup.
    pub fn sim_config(&self) -> SimConfig {
        let mut sim = SimConfig {
            seed: self.seed,
            ..Default::default()
        };
        sim.spawn.policy = self.spawn_policy.to_policy();
        sim
    }
}
